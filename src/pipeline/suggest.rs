//! Pipeline orchestration: mask → tokenize → build input → infer → decode →
//! reassemble

use thiserror::Error;

use crate::mlm::decode::decode;
use crate::mlm::input::{build_input, MAX_SEQUENCE_LENGTH};
use crate::mlm::model::{InferenceError, ModelInvoker};
use crate::mlm::tokenize::Tokenizer;
use crate::mlm::vocab::Vocabulary;

use super::mask::mask;
use super::reassemble::reassemble;

/// Default number of ranked candidates.
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

/// Outcome of one suggestion request.
///
/// The absence of an ambiguous word is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Neither "die" nor "dat" occurs in the sentence.
    NoAmbiguity,
    /// Ranked replacement candidates for the masked word, best first, plus
    /// the sentence with the top candidate spliced in.
    Ranked {
        candidates: Vec<String>,
        corrected_sentence: String,
    },
}

/// The die/dat correction pipeline.
///
/// Holds the immutable vocabulary and an injected inference backend; every
/// call is a pure transformation over them, so a shared `Pipeline` is safe
/// to use from multiple threads as long as the backend is.
pub struct Pipeline<M> {
    vocab: Vocabulary,
    tokenizer: Tokenizer,
    invoker: M,
    top_k: usize,
}

impl<M: ModelInvoker> Pipeline<M> {
    pub fn new(vocab: Vocabulary, invoker: M) -> Self {
        Pipeline {
            vocab,
            tokenizer: Tokenizer::new(),
            invoker,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of ranked candidates.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Suggest replacements for the first ambiguous "die"/"dat" in
    /// `sentence`.
    ///
    /// A malformed logit buffer from the backend (wrong length) is reported
    /// as an inference failure; no retry is attempted.
    pub fn suggest(&self, sentence: &str) -> Result<Suggestion, PipelineError> {
        let masked = mask(sentence);
        let Some(mask_index) = masked.mask_index else {
            return Ok(Suggestion::NoAmbiguity);
        };

        let token_ids = self.tokenizer.tokenize(&masked.sentence, &self.vocab);
        let input = build_input(&token_ids, MAX_SEQUENCE_LENGTH, &self.vocab);

        let logits = self.invoker.run(&input.attention_mask, &input.input_ids)?;

        let expected = MAX_SEQUENCE_LENGTH * self.vocab.size();
        if logits.len() != expected {
            return Err(InferenceError::MalformedOutput {
                got: logits.len(),
                expected,
            }
            .into());
        }

        let candidates = decode(&logits, &self.vocab, Some(mask_index), self.top_k);
        let corrected_sentence = reassemble(sentence, &candidates, mask_index);

        Ok(Suggestion::Ranked {
            candidates,
            corrected_sentence,
        })
    }
}
