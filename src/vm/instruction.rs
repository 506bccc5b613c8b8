//! Instruction - Decoding of a single Intcode instruction cell
//!
//! ```text
//! cell = ABCDE
//!         ││└┴─ opcode (two digits)
//!         │└─── mode of parameter 1
//!         └──── mode of parameter 2
//!        (A)    mode of parameter 3
//! ```
//!
//! Missing leading digits read as mode 0 (position).

use super::action::{Action, ParameterMode};
use super::Word;
use crate::error::{IntcodeError, Result};

/// Maximum parameters carried by any instruction
pub const MAX_PARAMS: usize = 3;

/// A decoded instruction: action plus per-parameter modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub action: Action,
    pub modes: [ParameterMode; MAX_PARAMS],
    /// The undecoded cell
    pub raw: Word,
}

impl Instruction {
    /// Decode the cell found at `pc`
    ///
    /// Modes are only validated for parameters the action actually takes.
    pub fn decode(raw: Word, pc: usize) -> Result<Self> {
        let action = Action::from_code(raw % 100);
        let mut modes = [ParameterMode::Position; MAX_PARAMS];
        for (slot, mode) in modes.iter_mut().enumerate().take(action.param_count()) {
            let digit = mode_digit(raw, slot + 1);
            *mode = ParameterMode::from_digit(digit)
                .ok_or(IntcodeError::UnknownMode { mode: digit, pc })?;
        }
        Ok(Self { action, modes, raw })
    }

    /// Mode of the 1-based parameter `index`
    pub fn mode(&self, index: usize) -> ParameterMode {
        debug_assert!((1..=MAX_PARAMS).contains(&index), "Parameter index must be 1-3");
        self.modes[index - 1]
    }

    pub fn width(&self) -> usize {
        self.action.width()
    }
}

/// Digit selecting the mode of parameter `index` (hundreds digit for index 1)
fn mode_digit(raw: Word, index: usize) -> Word {
    let divisor = 10_i64.pow(index as u32 + 1);
    (raw / divisor) % 10
}
