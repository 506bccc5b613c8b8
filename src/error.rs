//! Error types for intcode

use thiserror::Error;

use crate::vm::Word;

/// Intcode error type
#[derive(Debug, Error)]
pub enum IntcodeError {
    /// Opcode outside the instruction set
    #[error("Unknown opcode {opcode} at pc {pc}")]
    UnknownOpcode { opcode: Word, pc: usize },

    /// Parameter mode digit outside 0-2
    #[error("Unknown parameter mode {mode} at pc {pc}")]
    UnknownMode { mode: Word, pc: usize },

    /// Write target encoded in immediate mode
    #[error("Parameter {param} of instruction at pc {pc} is a write target in immediate mode")]
    ImmediateWrite { pc: usize, param: usize },

    #[error("Negative address {address} at pc {pc}")]
    NegativeAddress { address: Word, pc: usize },

    /// Address that cannot be represented on this host
    #[error("Address {address} exceeds host addressable range")]
    AddressOutOfRange { address: Word },

    #[error("Arithmetic overflow in opcode {opcode} at pc {pc}")]
    ArithmeticOverflow { opcode: Word, pc: usize },

    /// Input instruction reached with an empty queue where suspension is not allowed
    #[error("Input required at pc {pc} but none was supplied")]
    StarvedInput { pc: usize },

    #[error("Step budget of {budget} instructions exhausted")]
    StepBudgetExhausted { budget: u64 },

    /// Fault raised inside one amplifier of a network
    #[error("Amplifier {index} failed: {source}")]
    Amplifier {
        index: usize,
        #[source]
        source: Box<IntcodeError>,
    },

    /// Amplifier halted without producing the signal the network needed
    #[error("Amplifier {index} halted without producing output")]
    NoOutput { index: usize },

    /// Every running amplifier waits for input that nobody will send
    #[error("Amplifier network stalled: all live amplifiers are awaiting input")]
    NetworkStalled,

    #[error("Amplifier network has no amplifiers")]
    EmptyNetwork,

    #[error("Amplifier {index} thread panicked")]
    AmplifierPanicked { index: usize },

    /// Bad token in a comma-separated value list
    #[error("Invalid value {token:?} at position {index}")]
    Parse { index: usize, token: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntcodeError {
    /// Wrap a fault with the index of the amplifier that raised it
    pub fn in_amplifier(self, index: usize) -> Self {
        match self {
            already @ Self::Amplifier { .. } => already,
            other => Self::Amplifier {
                index,
                source: Box::new(other),
            },
        }
    }

    /// True for faults caused by the program itself rather than the caller
    pub fn is_malformed_program(&self) -> bool {
        matches!(
            self,
            Self::UnknownOpcode { .. }
                | Self::UnknownMode { .. }
                | Self::ImmediateWrite { .. }
                | Self::NegativeAddress { .. }
                | Self::AddressOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, IntcodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_amplifier_wraps_once() {
        let err = IntcodeError::StarvedInput { pc: 4 }.in_amplifier(2).in_amplifier(3);
        match err {
            IntcodeError::Amplifier { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, IntcodeError::StarvedInput { pc: 4 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_names_cause() {
        let err = IntcodeError::UnknownOpcode { opcode: 42, pc: 7 }.in_amplifier(1);
        let msg = err.to_string();
        assert!(msg.contains("Amplifier 1"));
        assert!(msg.contains("opcode 42"));
        assert!(msg.contains("pc 7"));
    }

    #[test]
    fn test_malformed_classification() {
        assert!(IntcodeError::ImmediateWrite { pc: 0, param: 3 }.is_malformed_program());
        assert!(!IntcodeError::StarvedInput { pc: 0 }.is_malformed_program());
        assert!(!IntcodeError::NetworkStalled.is_malformed_program());
    }
}
