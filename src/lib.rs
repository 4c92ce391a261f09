//! Dutch die/dat correction via masked-language-model decoding.
//!
//! The crate wraps an opaque masked-LM backend with the exact pre/post
//! processing the pretrained RobBERT vocabulary expects: ambiguity masking,
//! Ġ-prefixed subword tokenization, fixed-length input assembly, and logit
//! decoding into ranked replacement candidates.
//!
//! ```
//! use diedat::mlm::model::StaticInvoker;
//! use diedat::mlm::vocab::Vocabulary;
//! use diedat::pipeline::{Pipeline, Suggestion};
//!
//! let vocab = Vocabulary::from_entries([
//!     ("<s>".to_string(), 0),
//!     ("<pad>".to_string(), 1),
//!     ("</s>".to_string(), 2),
//!     ("<mask>".to_string(), 3),
//!     ("Ġdie".to_string(), 4),
//!     ("Ġdat".to_string(), 5),
//!     ("Ġik".to_string(), 6),
//!     ("Ġweet".to_string(), 7),
//! ]);
//! let backend = StaticInvoker::new(vocab.size());
//! let pipeline = Pipeline::new(vocab, backend);
//!
//! match pipeline.suggest("ik weet die ik het kan").unwrap() {
//!     Suggestion::NoAmbiguity => println!("nothing to correct"),
//!     Suggestion::Ranked { candidates, .. } => println!("try: {:?}", candidates),
//! }
//! ```

pub mod mlm;
pub mod pipeline;
