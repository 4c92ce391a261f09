//! Model invoker boundary
//!
//! The network itself is an external collaborator: an opaque function from
//! `(attention_mask, input_ids)` to a flat logit buffer of
//! `sequence_length * vocab_size` floats. This module only defines that
//! boundary and a fixed-logit stand-in used when no real backend is wired in.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("logit buffer has {got} floats, expected {expected}")]
    MalformedOutput { got: usize, expected: usize },
}

/// An opaque masked-LM inference backend.
///
/// Implementations must return a row-major flat buffer of
/// `input_ids.len() * vocab_size()` logits. The pipeline never retries a
/// failed invocation; retry policy belongs to the caller.
pub trait ModelInvoker {
    /// Width of one logit row.
    fn vocab_size(&self) -> usize;

    /// Run one inference call over a fixed-length input.
    fn run(&self, attention_mask: &[i64], input_ids: &[i64]) -> Result<Vec<f32>, InferenceError>;
}

/// Backend that serves a fixed logit table.
///
/// Defaults to all-zero logits (a uniform distribution after softmax), used
/// when no real backend is wired in. Individual `(row, id)` cells can be
/// raised to script deterministic predictions, which is what the tests do.
pub struct StaticInvoker {
    vocab_size: usize,
    /// Raised cells: (row, token id, logit value)
    cells: Vec<(usize, u32, f32)>,
}

impl StaticInvoker {
    pub fn new(vocab_size: usize) -> Self {
        StaticInvoker {
            vocab_size,
            cells: Vec::new(),
        }
    }

    /// Raise the logit for `id` at sequence position `row`.
    pub fn with_logit(mut self, row: usize, id: u32, value: f32) -> Self {
        self.cells.push((row, id, value));
        self
    }
}

impl ModelInvoker for StaticInvoker {
    fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    fn run(&self, _attention_mask: &[i64], input_ids: &[i64]) -> Result<Vec<f32>, InferenceError> {
        let mut logits = vec![0.0; input_ids.len() * self.vocab_size];
        for &(row, id, value) in &self.cells {
            let offset = row * self.vocab_size + id as usize;
            if offset < logits.len() && (id as usize) < self.vocab_size {
                logits[offset] = value;
            }
        }
        Ok(logits)
    }
}
