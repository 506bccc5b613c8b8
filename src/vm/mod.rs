//! Intcode VM - Interpreter for integer-encoded programs
//!
//! A program is a flat sequence of signed integers that doubles as the
//! initial contents of memory. Each instruction cell packs an opcode in its
//! low two decimal digits and one addressing mode per parameter above that.
//!
//! ## Layout
//!
//! ```text
//! memory       growable zero-filled tape, addresses >= 0
//! action       opcode set (closed enum) and parameter modes
//! instruction  decoding of one instruction cell
//! operand      parameter resolution (position / immediate / relative)
//! channel      input FIFO and output sink
//! interpreter  resumable fetch-decode-execute loop
//! ```
//!
//! ## Example
//!
//! ```
//! use intcode::vm::Interpreter;
//!
//! // read a value, add 10, print it
//! let mut vm = Interpreter::new(&[3, 9, 1001, 9, 10, 9, 4, 9, 99, 0], [32]);
//! assert_eq!(vm.run_to_halt().unwrap(), vec![42]);
//! ```

mod action;
mod channel;
mod instruction;
mod interpreter;
mod memory;
pub(crate) mod operand;

/// Machine word. Programs routinely exceed 32 bits.
pub type Word = i64;

pub use action::{Action, ParameterMode};
pub use channel::Channel;
pub use instruction::{Instruction, MAX_PARAMS};
pub use interpreter::{ExecState, Interpreter, Step, Yield};
pub use memory::Memory;
