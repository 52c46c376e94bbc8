//! Self-play runner for Vision-chess
//!
//! This crate provides infrastructure for:
//! - Playing matches between two engines with alternating colors
//! - Adjudicating finished games from the rules engine's status
//! - Saving results as JSON and rendering text reports
//!
//! # Usage
//!
//! ```bash
//! # Tier 3 against tier 8, twenty games
//! cargo run -p uci_engine -- selfplay --white-level 3 --black-level 8 --games 20
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
