//! Vocabulary: subword token table for the masked language model
//!
//! Handles:
//! - Subword token → id mapping with ordered fallback chains
//! - Id → token reverse mapping (first insertion wins on duplicate ids)
//! - Loading the pretrained vocab.json table

use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Sequence start marker.
pub const SEQ_START: &str = "<s>";
/// Sequence end marker.
pub const SEQ_END: &str = "</s>";
/// Padding token.
pub const PAD: &str = "<pad>";
/// Mask placeholder predicted by the model.
pub const MASK: &str = "<mask>";
/// Unknown-token fallback.
pub const UNK: &str = "<unk>";
/// Glyph prefixing subwords that begin a new word.
pub const WORD_PREFIX: &str = "\u{0120}"; // Ġ

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("could not read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("vocabulary file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary file must be a JSON object of token -> id")]
    NotAnObject,
    #[error("token {token:?} has a non-integer or negative id")]
    BadId { token: String },
}

/// Immutable subword vocabulary.
///
/// Built once, then shared read-only for the lifetime of the pipeline.
/// Ids are not required to be unique: the reverse index keeps the first
/// token inserted for each id, matching the source file's entry order.
pub struct Vocabulary {
    /// Subword token → id mapping
    token_to_id: FxHashMap<String, u32>,
    /// Id → first token inserted with that id
    id_to_token: FxHashMap<u32, String>,
}

impl Vocabulary {
    /// Build a vocabulary from `(token, id)` entries. Insertion order decides
    /// which token a duplicate id resolves back to.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut token_to_id = FxHashMap::default();
        let mut id_to_token = FxHashMap::default();

        for (token, id) in entries {
            id_to_token.entry(id).or_insert_with(|| token.clone());
            token_to_id.insert(token, id);
        }

        Vocabulary {
            token_to_id,
            id_to_token,
        }
    }

    /// Load a vocabulary from a JSON object of `token -> id`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VocabError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a vocabulary from JSON text. Entry order is preserved so that
    /// reverse lookups tie-break exactly like the source file.
    pub fn from_json_str(json: &str) -> Result<Self, VocabError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(VocabError::NotAnObject)?;

        let mut entries = Vec::with_capacity(object.len());
        for (token, id_value) in object {
            let id = id_value
                .as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| VocabError::BadId {
                    token: token.clone(),
                })?;
            entries.push((token.clone(), id));
        }

        log::debug!("vocabulary loaded: {} tokens", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// Look up the id for a token.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Ordered fallback chain: the id of the first key present, if any.
    pub fn id_chain(&self, keys: &[&str]) -> Option<u32> {
        keys.iter().find_map(|key| self.id(key))
    }

    /// Ordered fallback chain with a final literal default.
    pub fn id_or(&self, keys: &[&str], default: u32) -> u32 {
        self.id_chain(keys).unwrap_or(default)
    }

    /// Reverse lookup: the first token inserted with this id.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Number of distinct tokens. Also the width of one logit row.
    pub fn size(&self) -> usize {
        self.token_to_id.len()
    }
}
