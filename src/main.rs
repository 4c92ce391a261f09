//! Die/Dat Corrector - Dutch relative-pronoun correction via masked-LM decoding
//!
//! One-shot CLI: mask the first die/dat, run the inference backend, print
//! ranked candidates and the corrected sentence.

mod cli;

use clap::Parser;
use std::error::Error;

use cli::display::Display;
use diedat::mlm::model::StaticInvoker;
use diedat::mlm::vocab::Vocabulary;
use diedat::pipeline::{Pipeline, Suggestion, DEFAULT_TOP_K};

#[derive(Parser, Debug)]
#[command(name = "Die/Dat Corrector")]
#[command(about = "Suggests the correct Dutch relative pronoun (die/dat)")]
struct Args {
    /// Sentence to check
    sentence: String,

    /// Path to the pretrained vocabulary file (token -> id JSON object)
    #[arg(short, long, default_value = "data/vocab.json")]
    vocab: String,

    /// Number of ranked candidates to show
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let vocab = Vocabulary::load(&args.vocab)?;
    if args.debug {
        println!("✓ Vocabulary loaded: {} tokens", vocab.size());
    }

    // No inference backend is compiled into this binary; a flat logit table
    // stands in, so candidates come back in vocabulary order. Wire a real
    // ModelInvoker here to get meaningful rankings.
    eprintln!("⚠ No model backend configured; serving flat logits");
    let invoker = StaticInvoker::new(vocab.size());

    let pipeline = Pipeline::new(vocab, invoker).with_top_k(args.top_k);

    let display = Display::new();
    display.show_sentence(&args.sentence)?;

    match pipeline.suggest(&args.sentence)? {
        Suggestion::NoAmbiguity => display.show_no_ambiguity()?,
        Suggestion::Ranked {
            candidates,
            corrected_sentence,
        } => {
            display.show_candidates(&candidates)?;
            display.show_corrected(&corrected_sentence)?;
        }
    }

    Ok(())
}
