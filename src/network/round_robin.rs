//! Single-threaded scheduler: interleave resumable amplifiers in order

use crate::error::{IntcodeError, Result};
use crate::vm::{Interpreter, Word, Yield};

/// Signal 0 enters amplifier 0; every output of amplifier i feeds amplifier i + 1
///
/// Each amplifier runs to halt before the next starts, so programs that emit
/// more than once forward all of their outputs in order.
pub(super) fn run_linear(amplifiers: &mut [Interpreter]) -> Result<Word> {
    let mut signals = vec![0];
    for (index, amp) in amplifiers.iter_mut().enumerate() {
        amp.extend_inputs(signals);
        signals = amp.run_to_halt().map_err(|e| e.in_amplifier(index))?;
        if signals.is_empty() {
            return Err(IntcodeError::NoOutput { index });
        }
        log::trace!("amplifier {} emitted {:?}", index, signals);
    }
    signals.last().copied().ok_or(IntcodeError::EmptyNetwork)
}

/// Last amplifier feeds the first until every amplifier has halted
pub(super) fn run_feedback(amplifiers: &mut [Interpreter]) -> Result<Word> {
    let n = amplifiers.len();
    if n == 0 {
        return Err(IntcodeError::EmptyNetwork);
    }
    amplifiers[0].push_input(0);

    let mut final_signal = None;
    let mut rounds = 0u64;
    loop {
        let mut progressed = false;
        for index in 0..n {
            if amplifiers[index].is_halted() {
                continue;
            }
            loop {
                let executed = amplifiers[index].instructions_executed();
                let yielded = amplifiers[index]
                    .resume()
                    .map_err(|e| e.in_amplifier(index))?;
                match yielded {
                    Yield::Output(value) => {
                        amplifiers[(index + 1) % n].push_input(value);
                        if index == n - 1 {
                            final_signal = Some(value);
                        }
                        progressed = true;
                    }
                    Yield::AwaitingInput => {
                        progressed |= amplifiers[index].instructions_executed() != executed;
                        break;
                    }
                    Yield::Halted => {
                        progressed = true;
                        break;
                    }
                }
            }
        }
        rounds += 1;

        if amplifiers.iter().all(Interpreter::is_halted) {
            log::debug!("feedback loop settled after {} rounds", rounds);
            break;
        }
        if !progressed {
            log::warn!("feedback loop stalled after {} rounds", rounds);
            return Err(IntcodeError::NetworkStalled);
        }
    }
    final_signal.ok_or(IntcodeError::NoOutput { index: n - 1 })
}
