//! Phrase Puzzler
//!
//! Core of a two-player phrase guessing game: masking, scoring, turn order,
//! a computer opponent and round validation, with thin command hosts on top.
//!
//! # Quick Start
//!
//! ```rust
//! use phrase_puzzler::core::{GuessType, Player, Puzzle};
//! use phrase_puzzler::engine::{PuzzleEngine, Round};
//!
//! let engine = PuzzleEngine::default();
//! let puzzle = Puzzle::new("banana", engine.config()).unwrap();
//! let round = Round::new(&engine, &puzzle, (0, 0), Player::One);
//!
//! let report = round.apply_guess(&engine, 'n', GuessType::Consonant).unwrap();
//! assert_eq!(report.round.view(), "^^n^n^");
//! assert_eq!(report.round.score_of(Player::One), 2);
//! ```

// Core domain types
pub mod core;

// Game rules and the computer player
pub mod engine;

// Puzzle lists
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
