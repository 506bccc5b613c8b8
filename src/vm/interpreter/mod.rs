//! Interpreter - Resumable execution engine for the Intcode VM
//!
//! Each interpreter owns a private copy of its program, its program counter
//! and its relative base. Execution is an explicit state machine:
//!
//! ```text
//!   Running ──input missing──▶ AwaitingInput ──input pushed──▶ Running
//!      │
//!      └──opcode 99──▶ Halted (terminal)
//! ```
//!
//! Suspension on missing input returns control to the caller instead of
//! blocking, so the same engine serves run-to-completion callers, single
//! threaded round-robin networks and thread-per-instance networks.

mod ops_arith;
mod ops_control;
mod ops_io;

use super::operand::Operands;
use super::{Action, Channel, Instruction, Memory, Word};
use crate::error::{IntcodeError, Result};

/// Execution state of an interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Running,
    /// Suspended on an input instruction; the same instruction retries on resume
    AwaitingInput,
    Halted,
}

/// Result of executing a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Output(Word),
    /// Input instruction found an empty queue; pc was not advanced
    NeedInput,
    Halt,
}

/// Why [`Interpreter::resume`] handed control back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yield {
    Output(Word),
    AwaitingInput,
    Halted,
}

/// Intcode interpreter
#[derive(Debug, Clone)]
pub struct Interpreter {
    memory: Memory,
    pub(super) pc: usize,
    pub(super) relative_base: Word,
    state: ExecState,
    pub(super) channel: Channel,
    executed: u64,
    step_budget: Option<u64>,
}

impl Interpreter {
    /// Create an interpreter over a private copy of `program`
    pub fn new(program: &[Word], inputs: impl IntoIterator<Item = Word>) -> Self {
        Self {
            memory: Memory::from_program(program),
            pc: 0,
            relative_base: 0,
            state: ExecState::Running,
            channel: Channel::with_inputs(inputs),
            executed: 0,
            step_budget: None,
        }
    }

    pub fn from_program(program: &[Word]) -> Self {
        Self::new(program, [])
    }

    /// Fail with `StepBudgetExhausted` after `budget` instructions
    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    pub fn push_input(&mut self, value: Word) {
        self.channel.push_input(value);
    }

    pub fn extend_inputs(&mut self, values: impl IntoIterator<Item = Word>) {
        self.channel.extend_inputs(values);
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<Step> {
        if self.state == ExecState::Halted {
            return Ok(Step::Halt);
        }
        if let Some(budget) = self.step_budget {
            if self.executed >= budget {
                return Err(IntcodeError::StepBudgetExhausted { budget });
            }
        }

        let pc = self.pc;
        let raw = self.memory.read_at(pc).inspect_err(|e| log::warn!("{}", e))?;
        let instr = Instruction::decode(raw, pc).inspect_err(|e| log::warn!("{}", e))?;
        log::trace!("pc={} rb={} {} (raw {})", pc, self.relative_base, instr.action, raw);

        let result = match instr.action {
            Action::Add => self.execute_add(instr),
            Action::Mul => self.execute_mul(instr),
            Action::Input => self.execute_input(instr),
            Action::Output => self.execute_output(instr),
            Action::JumpIfTrue => self.execute_jump(instr, true),
            Action::JumpIfFalse => self.execute_jump(instr, false),
            Action::LessThan => self.execute_less_than(instr),
            Action::Equals => self.execute_equals(instr),
            Action::AdjustBase => self.execute_adjust_base(instr),
            Action::Halt => Ok(Step::Halt),
            Action::Unknown(opcode) => Err(IntcodeError::UnknownOpcode { opcode, pc }),
        };

        match result {
            Ok(Step::NeedInput) => {
                if self.state != ExecState::AwaitingInput {
                    log::debug!("suspended awaiting input at pc {}", pc);
                }
                self.state = ExecState::AwaitingInput;
            }
            Ok(Step::Halt) => {
                self.executed += 1;
                self.state = ExecState::Halted;
                log::debug!("halted at pc {} after {} instructions", pc, self.executed);
            }
            Ok(_) => {
                self.executed += 1;
                self.state = ExecState::Running;
            }
            Err(ref e) => log::warn!("fault at pc {}: {}", pc, e),
        }
        result
    }

    /// Run until the next output, a starved input, or halt
    pub fn resume(&mut self) -> Result<Yield> {
        loop {
            match self.step()? {
                Step::Continue => continue,
                Step::Output(value) => return Ok(Yield::Output(value)),
                Step::NeedInput => return Ok(Yield::AwaitingInput),
                Step::Halt => return Ok(Yield::Halted),
            }
        }
    }

    /// Run to completion on the queued inputs, returning every output
    ///
    /// Reaching an input instruction with an empty queue is a fault here.
    pub fn run_to_halt(&mut self) -> Result<Vec<Word>> {
        let mut outputs = Vec::new();
        loop {
            match self.resume()? {
                Yield::Output(value) => outputs.push(value),
                Yield::AwaitingInput => return Err(self.starved()),
                Yield::Halted => return Ok(outputs),
            }
        }
    }

    /// Enqueue `value` and run until the next output, suspension or halt
    pub fn step_with_input(&mut self, value: Word) -> Result<Yield> {
        self.push_input(value);
        self.resume()
    }

    /// Run until the next output without supplying input
    ///
    /// Returns `None` once halted. Starving for input is a fault: an input
    /// value is never invented on the caller's behalf.
    pub fn next_output(&mut self) -> Result<Option<Word>> {
        match self.resume()? {
            Yield::Output(value) => Ok(Some(value)),
            Yield::Halted => Ok(None),
            Yield::AwaitingInput => Err(self.starved()),
        }
    }

    fn starved(&self) -> IntcodeError {
        let err = IntcodeError::StarvedInput { pc: self.pc };
        log::warn!("{}", err);
        err
    }

    pub(super) fn operands(&mut self, instr: Instruction) -> Operands<'_> {
        Operands::new(&mut self.memory, instr, self.pc, self.relative_base)
    }

    pub(super) fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    // === Accessors ===

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn relative_base(&self) -> Word {
        self.relative_base
    }

    pub fn state(&self) -> ExecState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ExecState::Halted
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Every value emitted since construction
    pub fn outputs(&self) -> &[Word] {
        self.channel.outputs()
    }

    pub fn pending_inputs(&self) -> usize {
        self.channel.pending_inputs()
    }

    pub fn instructions_executed(&self) -> u64 {
        self.executed
    }
}
