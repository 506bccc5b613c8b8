//! Operand resolution - parameter modes to values and addresses

use super::action::ParameterMode;
use super::instruction::Instruction;
use super::memory::Memory;
use super::Word;
use crate::error::{IntcodeError, Result};

/// Resolves the parameters of one instruction against a tape
pub struct Operands<'a> {
    memory: &'a mut Memory,
    instr: Instruction,
    pc: usize,
    relative_base: Word,
}

impl<'a> Operands<'a> {
    pub fn new(memory: &'a mut Memory, instr: Instruction, pc: usize, relative_base: Word) -> Self {
        Self {
            memory,
            instr,
            pc,
            relative_base,
        }
    }

    /// Value of the 1-based parameter `index` for reading
    pub fn read(&mut self, index: usize) -> Result<Word> {
        let raw = self.raw(index)?;
        match self.instr.mode(index) {
            ParameterMode::Immediate => Ok(raw),
            ParameterMode::Position => self.load(raw),
            ParameterMode::Relative => {
                let address = self.offset(raw)?;
                self.load(address)
            }
        }
    }

    /// Address named by the 1-based parameter `index` for writing
    pub fn address(&mut self, index: usize) -> Result<Word> {
        let raw = self.raw(index)?;
        match self.instr.mode(index) {
            ParameterMode::Immediate => Err(IntcodeError::ImmediateWrite {
                pc: self.pc,
                param: index,
            }),
            ParameterMode::Position => Ok(raw),
            ParameterMode::Relative => self.offset(raw),
        }
    }

    /// Store `value` through the 1-based parameter `index`
    pub fn write(&mut self, index: usize, value: Word) -> Result<()> {
        let address = self.address(index)?;
        let pc = self.pc;
        self.memory
            .write(address, value)
            .map_err(|e| with_pc(e, pc))
    }

    fn raw(&mut self, index: usize) -> Result<Word> {
        self.memory.read_at(self.pc + index)
    }

    fn load(&mut self, address: Word) -> Result<Word> {
        let pc = self.pc;
        self.memory.read(address).map_err(|e| with_pc(e, pc))
    }

    fn offset(&self, raw: Word) -> Result<Word> {
        raw.checked_add(self.relative_base)
            .ok_or(IntcodeError::ArithmeticOverflow {
                opcode: self.instr.action.code(),
                pc: self.pc,
            })
    }
}

/// Attach the faulting program counter to a tape error
pub(crate) fn with_pc(err: IntcodeError, pc: usize) -> IntcodeError {
    match err {
        IntcodeError::NegativeAddress { address, .. } => IntcodeError::NegativeAddress { address, pc },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(memory: &mut Memory, pc: usize, base: Word) -> Operands<'_> {
        let raw = memory.read_at(pc).unwrap();
        let instr = Instruction::decode(raw, pc).unwrap();
        Operands::new(memory, instr, pc, base)
    }

    #[test]
    fn test_position_read() {
        let mut mem = Memory::from_program(&[1, 4, 5, 0, 11, 22]);
        let mut ops = operands(&mut mem, 0, 0);
        assert_eq!(ops.read(1).unwrap(), 11);
        assert_eq!(ops.read(2).unwrap(), 22);
    }

    #[test]
    fn test_immediate_read() {
        let mut mem = Memory::from_program(&[1101, 4, -5, 0]);
        let mut ops = operands(&mut mem, 0, 0);
        assert_eq!(ops.read(1).unwrap(), 4);
        assert_eq!(ops.read(2).unwrap(), -5);
    }

    #[test]
    fn test_relative_read_and_write() {
        let mut mem = Memory::from_program(&[22201, -1, 0, 1, 0, 0, 0, 0, 5, 6]);
        let mut ops = operands(&mut mem, 0, 9);
        assert_eq!(ops.read(1).unwrap(), 5);
        assert_eq!(ops.read(2).unwrap(), 6);
        assert_eq!(ops.address(3).unwrap(), 10);
        ops.write(3, 77).unwrap();
        assert_eq!(mem.as_slice()[10], 77);
    }

    #[test]
    fn test_immediate_write_rejected() {
        let mut mem = Memory::from_program(&[10001, 0, 0, 0]);
        let mut ops = operands(&mut mem, 0, 0);
        assert!(matches!(
            ops.write(3, 1),
            Err(IntcodeError::ImmediateWrite { pc: 0, param: 3 })
        ));
    }

    #[test]
    fn test_negative_address_reports_pc() {
        let mut mem = Memory::from_program(&[0, 0, 4, -3, 0]);
        let mut ops = operands(&mut mem, 2, 0);
        assert!(matches!(
            ops.read(1),
            Err(IntcodeError::NegativeAddress { address: -3, pc: 2 })
        ));
    }
}
