//! Fixed-length model input assembly
//!
//! Handles:
//! - Wrapping a token-id sequence with `<s>`/`</s>` markers
//! - Padding or truncating to the model's fixed sequence length
//! - Building the parallel attention mask

use super::vocab::{Vocabulary, PAD, SEQ_END, SEQ_START};

/// Fixed input width expected by the model.
pub const MAX_SEQUENCE_LENGTH: usize = 128;

/// The two equal-length sequences fed to the model backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInput {
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
}

/// Wrap `token_ids` with start/end markers and fit to `max_length`.
///
/// Longer sequences keep their first `max_length` ids; shorter ones are
/// right-padded with the `<pad>` id. The attention mask is all ones over the
/// full fixed length, padding included. That matches the pretrained model's
/// observed calling convention and must not be "fixed" locally: masking the
/// padding changes the model output.
pub fn build_input(token_ids: &[u32], max_length: usize, vocab: &Vocabulary) -> ModelInput {
    let start_id = vocab.id_or(&[SEQ_START], 0) as i64;
    let end_id = vocab.id_or(&[SEQ_END], 0) as i64;
    let pad_id = vocab.id_or(&[PAD], 1) as i64;

    let mut input_ids = Vec::with_capacity(max_length);
    input_ids.push(start_id);
    input_ids.extend(token_ids.iter().map(|&id| id as i64));
    input_ids.push(end_id);

    input_ids.truncate(max_length);
    input_ids.resize(max_length, pad_id);

    let attention_mask = vec![1; max_length];

    log::debug!(
        "built model input: {} ids, {} real tokens",
        input_ids.len(),
        token_ids.len().min(max_length)
    );

    ModelInput {
        input_ids,
        attention_mask,
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
        ])
    }

    #[test]
    fn test_markers_and_padding_layout() {
        let vocab = test_vocab();
        let token_ids: Vec<u32> = (10..20).collect();
        let input = build_input(&token_ids, MAX_SEQUENCE_LENGTH, &vocab);

        assert_eq!(input.input_ids.len(), MAX_SEQUENCE_LENGTH);
        assert_eq!(input.input_ids[0], 0);
        assert_eq!(input.input_ids[1..11], (10..20).collect::<Vec<i64>>()[..]);
        assert_eq!(input.input_ids[11], 2);
        // 2 markers + 10 tokens, then 116 pad ids
        assert!(input.input_ids[12..].iter().all(|&id| id == 1));
        assert_eq!(input.input_ids[12..].len(), 116);
    }

    #[test]
    fn test_attention_mask_is_all_ones_over_padding() {
        let vocab = test_vocab();
        let input = build_input(&[5, 6, 7], MAX_SEQUENCE_LENGTH, &vocab);
        assert_eq!(input.attention_mask.len(), MAX_SEQUENCE_LENGTH);
        assert!(input.attention_mask.iter().all(|&m| m == 1));
    }

    #[test]
    fn test_fixed_length_invariant() {
        let vocab = test_vocab();
        for len in [0, 1, MAX_SEQUENCE_LENGTH - 2, MAX_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH + 50] {
            let token_ids = vec![9u32; len];
            let input = build_input(&token_ids, MAX_SEQUENCE_LENGTH, &vocab);
            assert_eq!(input.input_ids.len(), MAX_SEQUENCE_LENGTH, "len {len}");
            assert_eq!(input.attention_mask.len(), MAX_SEQUENCE_LENGTH, "len {len}");
        }
    }

    #[test]
    fn test_truncation_keeps_leading_ids() {
        let vocab = test_vocab();
        let token_ids: Vec<u32> = (100..300).collect();
        let input = build_input(&token_ids, MAX_SEQUENCE_LENGTH, &vocab);
        // Start marker survives, end marker is truncated away
        assert_eq!(input.input_ids[0], 0);
        assert_eq!(input.input_ids[1], 100);
        assert_eq!(input.input_ids[MAX_SEQUENCE_LENGTH - 1], 100 + 126);
    }

    #[test]
    fn test_missing_special_tokens_use_literal_defaults() {
        let vocab = Vocabulary::from_entries([("Ġik".to_string(), 8)]);
        let input = build_input(&[8], 4, &vocab);
        // <s> and </s> default to 0, <pad> defaults to 1
        assert_eq!(input.input_ids, vec![0, 8, 0, 1]);
    }
}
