//! # Intcode - Integer Program VM
//!
//! An interpreter for Intcode programs (flat sequences of signed integers)
//! and a network runner that chains several interpreters into amplifier
//! loops.
//!
//! ## Core Components
//!
//! - **Interpreter**: resumable fetch-decode-execute loop with position,
//!   immediate and relative addressing over a growable memory tape
//! - **Channel**: per-instance input queue and output sink
//! - **AmplifierNetwork**: linear or feedback chains of interpreters, driven
//!   round-robin on one thread or one thread per amplifier
//!
//! ## Example
//!
//! ```
//! use intcode::{best_signal, Interpreter};
//!
//! let mut vm = Interpreter::from_program(&[104, 1125899906842624, 99]);
//! assert_eq!(vm.run_to_halt().unwrap(), vec![1125899906842624]);
//!
//! let program = [3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];
//! assert_eq!(best_signal(&program, &[0, 1, 2, 3, 4], false).unwrap(), 43210);
//! ```

// Intcode VM
pub mod vm;
pub use vm::{Action, ExecState, Instruction, Interpreter, Memory, ParameterMode, Step, Word, Yield};

// Amplifier networks
pub mod network;
pub use network::{best_signal, best_signal_with, permutations, AmplifierNetwork, BestSignal};

// Network configuration
pub mod config;
pub use config::{NetworkConfig, Scheduler, Topology};

// Program loader
pub mod loader;
pub use loader::{load_path, parse_program};

// Error types
mod error;
pub use error::{IntcodeError, Result};
