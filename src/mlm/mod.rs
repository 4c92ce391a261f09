//! MLM Module: vocabulary, tokenization, input assembly, and decoding
//!
//! # Components
//! - `vocab.rs`: subword token table with fallback-chain lookup
//! - `tokenize.rs`: regex segmentation into vocabulary ids
//! - `input.rs`: fixed-length input assembly with attention mask
//! - `model.rs`: opaque inference backend boundary
//! - `decode.rs`: softmax, top-k ranking, display-string mapping

pub mod decode;
pub mod input;
pub mod model;
pub mod tokenize;
pub mod vocab;
