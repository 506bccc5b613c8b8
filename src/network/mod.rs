//! Amplifier Network - Chains of Intcode instances routing output to input
//!
//! Every amplifier runs its own copy of the same program. Amplifier `i` is
//! given its phase as its very first input; after that, the signal enters
//! amplifier 0 as `0` and each output is queued as the next amplifier's input.
//!
//! ```text
//!   Linear:    0 ─▶ [A] ─▶ [B] ─▶ [C] ─▶ [D] ─▶ [E] ─▶ signal
//!
//!   Feedback:  0 ─▶ [A] ─▶ [B] ─▶ [C] ─▶ [D] ─▶ [E] ─┬─▶ signal
//!                    ▲                                │
//!                    └────────────────────────────────┘
//! ```
//!
//! Amplifiers are built fresh for every run, so no state leaks between
//! phase permutations.

mod permutation;
mod round_robin;
mod threaded;

pub use permutation::permutations;

use crate::config::{NetworkConfig, Scheduler, Topology};
use crate::error::{IntcodeError, Result};
use crate::vm::{Interpreter, Word};

/// One network wiring with a fixed phase per amplifier
#[derive(Debug, Clone)]
pub struct AmplifierNetwork<'a> {
    program: &'a [Word],
    phases: Vec<Word>,
    config: NetworkConfig,
}

impl<'a> AmplifierNetwork<'a> {
    pub fn new(program: &'a [Word], phases: &[Word], config: NetworkConfig) -> Self {
        Self {
            program,
            phases: phases.to_vec(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phases(&self) -> &[Word] {
        &self.phases
    }

    /// Run once and return the final signal of the last amplifier
    pub fn run(&self) -> Result<Word> {
        if self.phases.is_empty() {
            return Err(IntcodeError::EmptyNetwork);
        }
        let mut amplifiers = self.build_amplifiers();
        let feedback = self.config.is_feedback();
        match (self.config.scheduler, self.config.topology) {
            (Scheduler::RoundRobin, Topology::Linear) => round_robin::run_linear(&mut amplifiers),
            (Scheduler::RoundRobin, Topology::Feedback) => round_robin::run_feedback(&mut amplifiers),
            (Scheduler::Threaded, _) => threaded::run_threaded(amplifiers, feedback),
        }
    }

    fn build_amplifiers(&self) -> Vec<Interpreter> {
        self.phases
            .iter()
            .map(|&phase| {
                let amp = Interpreter::new(self.program, [phase]);
                match self.config.step_budget {
                    Some(budget) => amp.with_step_budget(budget),
                    None => amp,
                }
            })
            .collect()
    }
}

/// Highest signal found by [`best_signal_with`] and the phases producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSignal {
    pub signal: Word,
    pub phases: Vec<Word>,
}

/// Maximum final signal over every ordering of `phase_pool`
pub fn best_signal(program: &[Word], phase_pool: &[Word], feedback: bool) -> Result<Word> {
    let config = if feedback {
        NetworkConfig::feedback()
    } else {
        NetworkConfig::linear()
    };
    best_signal_with(program, phase_pool, &config).map(|best| best.signal)
}

/// Like [`best_signal`], with full configuration and the winning phase order
///
/// Any fault in any permutation aborts the search.
pub fn best_signal_with(
    program: &[Word],
    phase_pool: &[Word],
    config: &NetworkConfig,
) -> Result<BestSignal> {
    if phase_pool.is_empty() {
        return Err(IntcodeError::EmptyNetwork);
    }

    let mut best: Option<BestSignal> = None;
    for phases in permutations(phase_pool) {
        let signal = AmplifierNetwork::new(program, &phases, config.clone()).run()?;
        log::debug!("phases {:?} -> {}", phases, signal);
        if best.as_ref().map_or(true, |b| signal > b.signal) {
            best = Some(BestSignal { signal, phases });
        }
    }
    best.ok_or(IntcodeError::EmptyNetwork)
}
