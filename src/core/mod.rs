//! Core domain types for Phrase Puzzler
//!
//! This module contains the fundamental domain types: the game configuration,
//! the closed sets of players, guess types, difficulties and menu selections,
//! validated puzzle text, and the engine error type.

mod config;
mod error;
mod puzzle;
mod types;

pub use config::PuzzleConfig;
pub use error::EngineError;
pub use puzzle::{Puzzle, PuzzleError};
pub use types::{Difficulty, GameType, GuessType, Player, Selection};
