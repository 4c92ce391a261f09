//! Candidate decoding: logit row selection, softmax, top-k, display strings
//!
//! Handles:
//! - Selecting the logit row for the masked position (offset by one for the
//!   prepended `<s>` marker)
//! - Numerically stable softmax
//! - Stable top-k ranking and reverse vocabulary lookup

use super::vocab::{Vocabulary, UNK, WORD_PREFIX};

/// Numerically stable softmax: subtracts the row maximum before
/// exponentiating, so large logits cannot overflow. Empty input yields
/// empty output.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    if logits.is_empty() {
        return vec![];
    }

    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.iter().map(|&x| x / sum).collect()
}

/// Indices of the `k` largest values, descending, ties broken by original
/// index order (stable sort).
pub fn top_k_indices(values: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices.truncate(k);
    indices
}

/// Decode a flat logit buffer into up to `top_k` display strings for the
/// masked position, ranked by descending probability.
///
/// The buffer is partitioned into rows of `vocab.size()` floats; the row at
/// `mask_word_index + 1` is used (the model's token positions are offset by
/// one from word positions because of the prepended `<s>`). Returns an empty
/// list when there is no mask index, or when the mask row lies beyond the
/// buffer (the masked token was truncated out of the model input).
///
/// Reverse lookups that miss resolve to the literal `<unk>`; the Ġ word
/// prefix is stripped from every returned string.
pub fn decode(
    logits: &[f32],
    vocab: &Vocabulary,
    mask_word_index: Option<usize>,
    top_k: usize,
) -> Vec<String> {
    let Some(mask_word_index) = mask_word_index else {
        log::debug!("no mask position, nothing to decode");
        return vec![];
    };

    let Some(row) = logits.chunks(vocab.size()).nth(mask_word_index + 1) else {
        log::debug!("mask row {} beyond logit buffer", mask_word_index + 1);
        return vec![];
    };

    let probs = softmax(row);
    let top = top_k_indices(&probs, top_k);
    log::debug!("top {} ids at mask row: {:?}", top_k, top);

    top.into_iter()
        .map(|id| {
            vocab
                .token(id as u32)
                .unwrap_or(UNK)
                .replace(WORD_PREFIX, "")
        })
        .collect()
}
