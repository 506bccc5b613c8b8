//! Arithmetic and comparison operation implementations for the Interpreter

use super::{Instruction, Interpreter, Step};
use crate::error::{IntcodeError, Result};
use crate::vm::Word;

impl Interpreter {
    pub(super) fn execute_add(&mut self, instr: Instruction) -> Result<Step> {
        self.execute_binary(instr, Word::checked_add)
    }

    pub(super) fn execute_mul(&mut self, instr: Instruction) -> Result<Step> {
        self.execute_binary(instr, Word::checked_mul)
    }

    pub(super) fn execute_less_than(&mut self, instr: Instruction) -> Result<Step> {
        self.execute_binary(instr, |a, b| Some(Word::from(a < b)))
    }

    pub(super) fn execute_equals(&mut self, instr: Instruction) -> Result<Step> {
        self.execute_binary(instr, |a, b| Some(Word::from(a == b)))
    }

    /// dst = op(a, b); `None` from `op` means overflow
    fn execute_binary(
        &mut self,
        instr: Instruction,
        op: impl FnOnce(Word, Word) -> Option<Word>,
    ) -> Result<Step> {
        let pc = self.pc;
        let mut ops = self.operands(instr);
        let a = ops.read(1)?;
        let b = ops.read(2)?;
        let value = op(a, b).ok_or(IntcodeError::ArithmeticOverflow {
            opcode: instr.action.code(),
            pc,
        })?;
        ops.write(3, value)?;
        self.pc += instr.width();
        Ok(Step::Continue)
    }
}
