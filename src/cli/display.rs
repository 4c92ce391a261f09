//! Terminal rendering of suggestion results
//!
//! Features:
//! - Color-coded candidate list (best candidate highlighted)
//! - Corrected-sentence line
//! - Plain status line for the no-ambiguity outcome

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{stdout, Write};

/// Terminal display for suggestion results
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Echo the sentence under review
    pub fn show_sentence(&self, sentence: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("Sentence: "),
            ResetColor,
            Print(sentence),
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render ranked candidates, best first
    pub fn show_candidates(&self, candidates: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Magenta),
            Print("Candidates: "),
            ResetColor
        )?;

        for (rank, candidate) in candidates.iter().enumerate() {
            let color = if rank == 0 {
                Color::Green
            } else {
                Color::DarkGrey
            };
            if rank > 0 {
                execute!(stdout, Print(", "))?;
            }
            execute!(
                stdout,
                SetForegroundColor(color),
                Print(candidate),
                ResetColor
            )?;
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the sentence with the top candidate spliced in
    pub fn show_corrected(&self, corrected: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("Corrected: "),
            ResetColor
        )?;

        if corrected.is_empty() {
            execute!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print("(no replacement)"),
                ResetColor
            )?;
        } else {
            execute!(stdout, Print(corrected))?;
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the no-ambiguity outcome
    pub fn show_no_ambiguity(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("No \"die\" or \"dat\" found; nothing to correct.\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
