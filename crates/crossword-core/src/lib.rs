//! Deterministic crossword generation
//!
//! Given a word bank and a calendar date string, this crate builds the same
//! interlocking crossword every time: a seeded selection of candidate words,
//! a bounded number of placement trials on a square grid, pruning of words
//! that do not interlock, and clue numbering.
//!
//! ```
//! use crossword_core::{generate, GeneratorConfig, WordBank};
//!
//! let bank = WordBank::builtin();
//! let puzzle = generate(&bank, "2026-10-15", &GeneratorConfig::default()).unwrap();
//! assert!(!puzzle.placements.is_empty());
//! ```

pub mod bank;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod numbering;
pub mod placer;
pub mod puzzle;
pub mod rng;
pub mod seed;
pub mod selector;

pub use bank::{WordBank, WordEntry};
pub use error::{BankError, ConfigError, CrosswordError, Result};
pub use generator::{GenerationMeta, Generator, GeneratorConfig};
pub use grid::{Direction, Grid, Position};
pub use layout::{Layout, Placement};
pub use numbering::Numbering;
pub use puzzle::{is_solved, Bounds, Clue, PuzzleResult};
pub use rng::Mulberry32;
pub use seed::{hash_str, random_seed};
pub use selector::select_candidates;

/// Generate the puzzle for a calendar date string (`YYYY-MM-DD`).
///
/// Deterministic for a fixed `(bank, date, config)`. Fails only when the
/// configuration is invalid.
pub fn generate(bank: &WordBank, date: &str, config: &GeneratorConfig) -> Result<PuzzleResult> {
    generate_with_seed(bank, hash_str(date), config)
}

/// Generate a puzzle from an explicit base seed instead of a date string.
pub fn generate_with_seed(
    bank: &WordBank,
    seed: u32,
    config: &GeneratorConfig,
) -> Result<PuzzleResult> {
    let generator = Generator::new(config.clone())?;
    Ok(generator.generate(bank.entries(), seed))
}
