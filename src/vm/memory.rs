//! Memory - Growable tape backing program and working storage
//!
//! Addresses start at zero and are never negative. Any access past the
//! current end zero-fills the gap first, so the tape only ever grows.

use super::Word;
use crate::error::{IntcodeError, Result};

/// Zero-extending tape of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    /// Copy a program into a fresh tape
    pub fn from_program(program: &[Word]) -> Self {
        Self {
            cells: program.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }

    /// Read the word at `address`, growing the tape if needed
    pub fn read(&mut self, address: Word) -> Result<Word> {
        let idx = self.ensure(address)?;
        Ok(self.cells[idx])
    }

    /// Write `value` at `address`, growing the tape if needed
    pub fn write(&mut self, address: Word, value: Word) -> Result<()> {
        let idx = self.ensure(address)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Read at a host index (program counter arithmetic)
    pub(crate) fn read_at(&mut self, index: usize) -> Result<Word> {
        let address = Word::try_from(index).unwrap_or(Word::MAX);
        self.grow_to_cover(index, address)?;
        Ok(self.cells[index])
    }

    fn ensure(&mut self, address: Word) -> Result<usize> {
        if address < 0 {
            // pc is filled in by the interpreter when it surfaces the fault
            return Err(IntcodeError::NegativeAddress { address, pc: 0 });
        }
        let idx = usize::try_from(address)
            .map_err(|_| IntcodeError::AddressOutOfRange { address })?;
        self.grow_to_cover(idx, address)?;
        Ok(idx)
    }

    /// Zero-fill up to and including `idx`; an unallocatable tape is a fault
    fn grow_to_cover(&mut self, idx: usize, address: Word) -> Result<()> {
        if idx < self.cells.len() {
            return Ok(());
        }
        let new_len = idx
            .checked_add(1)
            .ok_or(IntcodeError::AddressOutOfRange { address })?;
        self.cells
            .try_reserve(new_len - self.cells.len())
            .map_err(|_| IntcodeError::AddressOutOfRange { address })?;
        self.cells.resize(new_len, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_program() {
        let mut mem = Memory::from_program(&[1, 2, 3]);
        assert_eq!(mem.read(2).unwrap(), 3);
        assert_eq!(mem.len(), 3);
    }

    #[test]
    fn test_read_past_end_grows_with_zeros() {
        let program = [7, 8, 9, 10];
        let mut mem = Memory::from_program(&program);
        let far = (program.len() * 10) as Word;

        assert_eq!(mem.read(far).unwrap(), 0);
        assert_eq!(mem.len(), program.len() * 10 + 1);
        assert_eq!(&mem.as_slice()[..4], &program);
        assert!(mem.as_slice()[4..].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_write_past_end() {
        let mut mem = Memory::from_program(&[99]);
        mem.write(50, -12).unwrap();
        assert_eq!(mem.read(50).unwrap(), -12);
        assert_eq!(mem.read(49).unwrap(), 0);
        assert_eq!(mem.len(), 51);
    }

    #[test]
    fn test_length_never_shrinks() {
        let mut mem = Memory::from_program(&[0; 5]);
        mem.read(20).unwrap();
        mem.read(3).unwrap();
        mem.write(1, 4).unwrap();
        assert_eq!(mem.len(), 21);
    }

    #[test]
    fn test_negative_address_rejected() {
        let mut mem = Memory::from_program(&[1, 2]);
        assert!(matches!(
            mem.read(-1),
            Err(IntcodeError::NegativeAddress { address: -1, .. })
        ));
        assert!(matches!(
            mem.write(-5, 1),
            Err(IntcodeError::NegativeAddress { address: -5, .. })
        ));
        assert_eq!(mem.len(), 2);
    }

    #[test]
    fn test_unallocatable_address_is_fault() {
        let mut mem = Memory::from_program(&[1, 2]);
        assert!(matches!(
            mem.read(Word::MAX),
            Err(IntcodeError::AddressOutOfRange { address: Word::MAX })
        ));
        assert!(matches!(
            mem.write(Word::MAX - 1, 3),
            Err(IntcodeError::AddressOutOfRange { .. })
        ));
        assert!(matches!(
            mem.read_at(usize::MAX),
            Err(IntcodeError::AddressOutOfRange { address: Word::MAX })
        ));
        assert_eq!(mem.len(), 2);
    }
}
