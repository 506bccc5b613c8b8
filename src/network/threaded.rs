//! Thread-per-amplifier scheduler connected by channels
//!
//! A suspended amplifier blocks on its inbox instead of returning to a
//! scheduler. A network that never settles blocks forever here; use the
//! round-robin scheduler for stall detection.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::error::{IntcodeError, Result};
use crate::vm::{Interpreter, Word, Yield};

pub(super) fn run_threaded(mut amplifiers: Vec<Interpreter>, feedback: bool) -> Result<Word> {
    let n = amplifiers.len();
    if n == 0 {
        return Err(IntcodeError::EmptyNetwork);
    }
    amplifiers[0].push_input(0);

    let (senders, receivers): (Vec<Sender<Word>>, Vec<Receiver<Word>>) =
        (0..n).map(|_| channel()).unzip();

    let handles: Vec<_> = amplifiers
        .into_iter()
        .zip(receivers)
        .enumerate()
        .map(|(index, (amp, inbox))| {
            let outbox = if index + 1 < n {
                Some(senders[index + 1].clone())
            } else if feedback {
                Some(senders[0].clone())
            } else {
                None
            };
            thread::spawn(move || drive(index, amp, inbox, outbox))
        })
        .collect();
    // Only amplifier threads may keep inboxes open from here on
    drop(senders);

    let mut final_signal = None;
    let mut errors = Vec::new();
    for (index, handle) in handles.into_iter().enumerate() {
        let outcome = handle
            .join()
            .unwrap_or(Err(IntcodeError::AmplifierPanicked { index }));
        match outcome {
            Ok(last) if index == n - 1 => final_signal = last,
            Ok(_) => {}
            Err(e) => errors.push(e),
        }
    }
    if let Some(e) = root_cause(errors) {
        return Err(e);
    }
    final_signal.ok_or(IntcodeError::NoOutput { index: n - 1 })
}

/// Pick the fault that started a failure cascade
///
/// An amplifier that faults drops its outbox, so the amplifiers fed by it
/// starve in turn. Their `StarvedInput` errors are reported only when no
/// other fault was recorded.
fn root_cause(errors: Vec<IntcodeError>) -> Option<IntcodeError> {
    let mut starved = None;
    for e in errors {
        if is_starved(&e) {
            starved.get_or_insert(e);
        } else {
            return Some(e);
        }
    }
    starved
}

fn is_starved(err: &IntcodeError) -> bool {
    match err {
        IntcodeError::Amplifier { source, .. } => is_starved(source),
        IntcodeError::StarvedInput { .. } => true,
        _ => false,
    }
}

/// Run one amplifier until it halts, returning its last output
fn drive(
    index: usize,
    mut amp: Interpreter,
    inbox: Receiver<Word>,
    outbox: Option<Sender<Word>>,
) -> Result<Option<Word>> {
    let mut last = None;
    loop {
        match amp.resume().map_err(|e| e.in_amplifier(index))? {
            Yield::Output(value) => {
                last = Some(value);
                if let Some(tx) = &outbox {
                    // A halted downstream amplifier has dropped its inbox
                    if tx.send(value).is_err() {
                        log::debug!("amplifier {} output {} dropped: downstream halted", index, value);
                    }
                }
            }
            Yield::AwaitingInput => match inbox.recv() {
                Ok(value) => amp.push_input(value),
                Err(_) => {
                    return Err(IntcodeError::StarvedInput { pc: amp.pc() }.in_amplifier(index));
                }
            },
            Yield::Halted => return Ok(last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threaded_linear_chain() {
        // out = signal * 10 + phase
        let program = [3, 20, 3, 21, 1002, 21, 10, 21, 1, 21, 20, 21, 4, 21, 99];
        let amps: Vec<_> = [1, 2, 3]
            .iter()
            .map(|&p| Interpreter::new(&program, [p]))
            .collect();
        assert_eq!(run_threaded(amps, false).unwrap(), 123);
    }

    #[test]
    fn test_threaded_starved_reports_amplifier() {
        let amps = vec![
            Interpreter::new(&[3, 0, 3, 0, 4, 0, 99], [0]),
            Interpreter::new(&[3, 0, 3, 0, 3, 0, 99], [0]),
        ];
        match run_threaded(amps, false).unwrap_err() {
            IntcodeError::Amplifier { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, IntcodeError::StarvedInput { pc: 4 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_threaded_fault_propagates() {
        let amps = vec![Interpreter::new(&[3, 0, 3, 0, 77], [0])];
        match run_threaded(amps, true).unwrap_err() {
            IntcodeError::Amplifier { index, source } => {
                assert_eq!(index, 0);
                assert!(matches!(*source, IntcodeError::UnknownOpcode { opcode: 77, pc: 4 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_threaded_fault_downstream_outranks_starved_upstream() {
        // Amplifier 0 echoes forever; amplifier 1 faults after one signal,
        // which leaves amplifier 0 waiting on a closed inbox.
        let amps = vec![
            Interpreter::new(&[3, 0, 3, 0, 4, 0, 1105, 1, 2], [0]),
            Interpreter::new(&[3, 0, 3, 0, 77], [0]),
        ];
        match run_threaded(amps, true).unwrap_err() {
            IntcodeError::Amplifier { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, IntcodeError::UnknownOpcode { opcode: 77, pc: 4 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_cause_falls_back_to_starved() {
        let starved = IntcodeError::StarvedInput { pc: 2 }.in_amplifier(0);
        let fault = IntcodeError::UnknownOpcode { opcode: 77, pc: 4 }.in_amplifier(2);
        assert!(matches!(
            root_cause(vec![starved, fault]),
            Some(IntcodeError::Amplifier { index: 2, .. })
        ));

        let only_starved = vec![IntcodeError::StarvedInput { pc: 2 }.in_amplifier(1)];
        assert!(matches!(
            root_cause(only_starved),
            Some(IntcodeError::Amplifier { index: 1, .. })
        ));
        assert!(root_cause(Vec::new()).is_none());
    }
}
