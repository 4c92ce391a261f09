//! Tokenizer: subword segmentation against the pretrained vocabulary
//!
//! Handles:
//! - Regex segmentation: the `<mask>` placeholder whole, word runs, single
//!   punctuation characters
//! - Ġ-prefix lookup convention for word-initial subwords
//! - `<unk>` fallbacks; a token missing both lookups contributes no id

use regex::Regex;

use super::vocab::{Vocabulary, MASK, UNK, WORD_PREFIX};

/// Splits text into vocabulary ids following the model's conventions.
pub struct Tokenizer {
    /// Matches the mask placeholder whole, else word runs, else punctuation
    segment: Regex,
    /// Full-match test for a single non-word, non-space character
    punctuation: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            segment: Regex::new(r"<mask>|\w+|[^\w\s]").expect("segmentation pattern is valid"),
            punctuation: Regex::new(r"^[^\w\s]$").expect("punctuation pattern is valid"),
        }
    }

    /// Convert a sentence into an ordered id sequence, without start/end
    /// markers. Whitespace produces no tokens.
    ///
    /// Words are looked up with the Ġ prefix only; a bare word is never a
    /// valid key. Punctuation contributes up to two ids: the prefix glyph
    /// alone, then the character itself.
    pub fn tokenize(&self, text: &str, vocab: &Vocabulary) -> Vec<u32> {
        let mask_id = vocab.id_or(&[MASK, UNK], 0);

        let mut ids = Vec::new();
        for segment in self.segment.find_iter(text).map(|m| m.as_str()) {
            if segment == MASK {
                ids.push(mask_id);
            } else if self.punctuation.is_match(segment) {
                if let Some(id) = vocab.id_chain(&[WORD_PREFIX, UNK]) {
                    ids.push(id);
                }
                if let Some(id) = vocab.id_chain(&[segment, UNK]) {
                    ids.push(id);
                }
            } else {
                let prefixed = format!("{WORD_PREFIX}{segment}");
                if let Some(id) = vocab.id_chain(&[&prefixed, UNK]) {
                    ids.push(id);
                }
            }
        }

        log::debug!("tokenized {:?} into {} ids", text, ids.len());
        ids
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mlm::vocab::Vocabulary;

    fn test_vocab() -> Vocabulary {
        Vocabulary::from_entries([
            ("<s>".to_string(), 0),
            ("<pad>".to_string(), 1),
            ("</s>".to_string(), 2),
            ("<unk>".to_string(), 3),
            ("<mask>".to_string(), 4),
            ("Ġ".to_string(), 5),
            ("Ġdie".to_string(), 6),
            ("Ġdat".to_string(), 7),
            ("Ġik".to_string(), 8),
            (".".to_string(), 9),
            ("Ġweet".to_string(), 10),
        ])
    }

    #[test]
    fn test_words_use_prefix_lookup() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        assert_eq!(tokenizer.tokenize("ik weet", &vocab), vec![8, 10]);
    }

    #[test]
    fn test_mask_placeholder_matched_whole() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        assert_eq!(tokenizer.tokenize("ik <mask> dat", &vocab), vec![8, 4, 7]);
    }

    #[test]
    fn test_punctuation_contributes_two_ids() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        // Prefix glyph alone, then the punctuation character itself
        assert_eq!(tokenizer.tokenize("ik.", &vocab), vec![8, 5, 9]);
    }

    #[test]
    fn test_unknown_word_falls_back_to_unk() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        assert_eq!(tokenizer.tokenize("zeppelin", &vocab), vec![3]);
    }

    #[test]
    fn test_unknown_punctuation_falls_back_to_unk() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        // "?" is absent, so the second id falls back to <unk>
        assert_eq!(tokenizer.tokenize("ik?", &vocab), vec![8, 5, 3]);
    }

    #[test]
    fn test_double_miss_contributes_no_id() {
        let tokenizer = Tokenizer::new();
        let vocab = Vocabulary::from_entries([("Ġik".to_string(), 8)]);
        // No Ġword entry and no <unk>: the segment is silently dropped
        assert_eq!(tokenizer.tokenize("ik zeppelin", &vocab), vec![8]);
    }

    #[test]
    fn test_mask_id_falls_back_to_literal_zero() {
        let tokenizer = Tokenizer::new();
        let vocab = Vocabulary::from_entries([("Ġik".to_string(), 8)]);
        assert_eq!(tokenizer.tokenize("<mask>", &vocab), vec![0]);
    }

    #[test]
    fn test_whitespace_produces_no_tokens() {
        let tokenizer = Tokenizer::new();
        let vocab = test_vocab();
        assert_eq!(tokenizer.tokenize("   ", &vocab), Vec::<u32>::new());
        assert_eq!(tokenizer.tokenize("", &vocab), Vec::<u32>::new());
    }
}
