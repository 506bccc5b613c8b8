//! Action - Opcode definitions for the Intcode VM
//!
//! The opcode lives in the low two decimal digits of an instruction cell.
//!
//! | Code | Action         | Params | Effect                              |
//! |------|----------------|--------|-------------------------------------|
//! | 1    | ADD            | 3      | dst = a + b                         |
//! | 2    | MUL            | 3      | dst = a * b                         |
//! | 3    | INPUT          | 1      | dst = next queued input             |
//! | 4    | OUTPUT         | 1      | emit a                              |
//! | 5    | JUMP_IF_TRUE   | 2      | pc = b if a != 0                    |
//! | 6    | JUMP_IF_FALSE  | 2      | pc = b if a == 0                    |
//! | 7    | LESS_THAN      | 3      | dst = a < b                         |
//! | 8    | EQUALS         | 3      | dst = a == b                        |
//! | 9    | ADJUST_BASE    | 1      | relative_base += a                  |
//! | 99   | HALT           | 0      | stop                                |

use std::fmt;

use super::Word;

/// Decoded opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Mul,
    Input,
    Output,
    JumpIfTrue,
    JumpIfFalse,
    LessThan,
    Equals,
    AdjustBase,
    Halt,
    /// Anything else; executing it is a fault
    Unknown(Word),
}

impl Action {
    /// Decode from the two-digit opcode
    pub const fn from_code(code: Word) -> Self {
        match code {
            1 => Self::Add,
            2 => Self::Mul,
            3 => Self::Input,
            4 => Self::Output,
            5 => Self::JumpIfTrue,
            6 => Self::JumpIfFalse,
            7 => Self::LessThan,
            8 => Self::Equals,
            9 => Self::AdjustBase,
            99 => Self::Halt,
            other => Self::Unknown(other),
        }
    }

    pub const fn code(&self) -> Word {
        match self {
            Self::Add => 1,
            Self::Mul => 2,
            Self::Input => 3,
            Self::Output => 4,
            Self::JumpIfTrue => 5,
            Self::JumpIfFalse => 6,
            Self::LessThan => 7,
            Self::Equals => 8,
            Self::AdjustBase => 9,
            Self::Halt => 99,
            Self::Unknown(code) => *code,
        }
    }

    /// Number of parameter cells following the opcode cell
    pub const fn param_count(&self) -> usize {
        match self {
            Self::Add | Self::Mul | Self::LessThan | Self::Equals => 3,
            Self::JumpIfTrue | Self::JumpIfFalse => 2,
            Self::Input | Self::Output | Self::AdjustBase => 1,
            Self::Halt | Self::Unknown(_) => 0,
        }
    }

    /// Instruction width in cells, opcode included
    pub const fn width(&self) -> usize {
        self.param_count() + 1
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::JumpIfTrue => "JUMP_IF_TRUE",
            Self::JumpIfFalse => "JUMP_IF_FALSE",
            Self::LessThan => "LESS_THAN",
            Self::Equals => "EQUALS",
            Self::AdjustBase => "ADJUST_BASE",
            Self::Halt => "HALT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => write!(f, "{}", other.mnemonic()),
        }
    }
}

/// Parameter addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ParameterMode {
    /// Parameter is an address to dereference
    #[default]
    Position = 0,
    /// Parameter is the value itself
    Immediate = 1,
    /// Parameter is an offset from the relative base
    Relative = 2,
}

impl ParameterMode {
    pub const fn from_digit(digit: Word) -> Option<Self> {
        match digit {
            0 => Some(Self::Position),
            1 => Some(Self::Immediate),
            2 => Some(Self::Relative),
            _ => None,
        }
    }
}
