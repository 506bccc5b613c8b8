//! Channel - Per-instance input queue and output sink

use std::collections::VecDeque;

use super::Word;

/// FIFO of pending inputs plus every output emitted so far
#[derive(Debug, Clone, Default)]
pub struct Channel {
    inputs: VecDeque<Word>,
    outputs: Vec<Word>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: impl IntoIterator<Item = Word>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }

    pub fn push_input(&mut self, value: Word) {
        self.inputs.push_back(value);
    }

    pub fn extend_inputs(&mut self, values: impl IntoIterator<Item = Word>) {
        self.inputs.extend(values);
    }

    /// Next input in arrival order
    pub fn take_input(&mut self) -> Option<Word> {
        self.inputs.pop_front()
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn emit(&mut self, value: Word) {
        self.outputs.push(value);
    }

    pub fn outputs(&self) -> &[Word] {
        &self.outputs
    }

    pub fn last_output(&self) -> Option<Word> {
        self.outputs.last().copied()
    }

    /// Move the collected outputs out, leaving the sink empty
    pub fn drain_outputs(&mut self) -> Vec<Word> {
        std::mem::take(&mut self.outputs)
    }
}
