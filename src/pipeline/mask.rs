//! Ambiguity masking: find the first die/dat and replace it with `<mask>`

use crate::mlm::vocab::MASK;

/// The ambiguous relative pronouns, matched case-insensitively.
pub const TARGET_WORDS: [&str; 2] = ["die", "dat"];

/// A sentence with at most one word replaced by the mask placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSentence {
    pub sentence: String,
    /// Zero-based word index of the masked word, if any was found.
    pub mask_index: Option<usize>,
}

/// Replace the first case-insensitive occurrence of "die" or "dat" with
/// `<mask>` and record its word index.
///
/// Words are split on single ASCII spaces; consecutive spaces yield empty
/// words that still count for indexing. Later occurrences of the target
/// words are left untouched. Without a match the sentence comes back
/// unchanged with no index.
pub fn mask(sentence: &str) -> MaskedSentence {
    let mut mask_index = None;

    let words: Vec<&str> = sentence
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if mask_index.is_none() && TARGET_WORDS.contains(&word.to_lowercase().as_str()) {
                mask_index = Some(index);
                MASK
            } else {
                word
            }
        })
        .collect();

    let masked = MaskedSentence {
        sentence: words.join(" "),
        mask_index,
    };
    log::debug!("masked sentence: {:?}", masked);
    masked
}
