//! Input/output operation implementations for the Interpreter

use super::{Instruction, Interpreter, Step};
use crate::error::Result;
use crate::vm::operand::with_pc;

impl Interpreter {
    /// Leaves pc in place when no input is queued so the instruction retries
    pub(super) fn execute_input(&mut self, instr: Instruction) -> Result<Step> {
        let pc = self.pc;
        let address = self.operands(instr).address(1)?;
        let Some(value) = self.channel.take_input() else {
            return Ok(Step::NeedInput);
        };
        self.memory_mut()
            .write(address, value)
            .map_err(|e| with_pc(e, pc))?;
        self.pc += instr.width();
        Ok(Step::Continue)
    }

    pub(super) fn execute_output(&mut self, instr: Instruction) -> Result<Step> {
        let value = self.operands(instr).read(1)?;
        self.channel.emit(value);
        log::debug!("output {} at pc {}", value, self.pc);
        self.pc += instr.width();
        Ok(Step::Output(value))
    }
}
