//! Control flow operation implementations for the Interpreter

use super::{Instruction, Interpreter, Step};
use crate::error::{IntcodeError, Result};

impl Interpreter {
    /// Jump to parameter 2 when parameter 1 is non-zero (`when_true`) or zero
    pub(super) fn execute_jump(&mut self, instr: Instruction, when_true: bool) -> Result<Step> {
        let pc = self.pc;
        let mut ops = self.operands(instr);
        let condition = ops.read(1)?;
        let target = ops.read(2)?;

        if (condition != 0) == when_true {
            self.pc = usize::try_from(target).map_err(|_| {
                if target < 0 {
                    IntcodeError::NegativeAddress { address: target, pc }
                } else {
                    IntcodeError::AddressOutOfRange { address: target }
                }
            })?;
        } else {
            self.pc += instr.width();
        }
        Ok(Step::Continue)
    }

    pub(super) fn execute_adjust_base(&mut self, instr: Instruction) -> Result<Step> {
        let pc = self.pc;
        let delta = self.operands(instr).read(1)?;
        self.relative_base = self
            .relative_base
            .checked_add(delta)
            .ok_or(IntcodeError::ArithmeticOverflow {
                opcode: instr.action.code(),
                pc,
            })?;
        self.pc += instr.width();
        Ok(Step::Continue)
    }
}
