//! Pipeline Module: sentence-level masking, orchestration, and reassembly
//!
//! # Components
//! - `mask.rs`: first die/dat occurrence → `<mask>` with word index
//! - `suggest.rs`: end-to-end `Pipeline::suggest` orchestration
//! - `reassemble.rs`: splicing the top candidate back into the sentence

pub mod mask;
pub mod reassemble;
pub mod suggest;

pub use mask::{mask, MaskedSentence};
pub use reassemble::reassemble;
pub use suggest::{Pipeline, PipelineError, Suggestion, DEFAULT_TOP_K};
