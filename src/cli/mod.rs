//! CLI Module: terminal output
//!
//! # Components
//! - `display.rs`: crossterm rendering of candidates and corrections

pub mod display;
