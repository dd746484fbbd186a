//! Phrase Puzzler rule engine
//!
//! Pure operations over explicit round state: masking, scoring, turn
//! rotation, computer strategy, and termination/validation.

pub mod computer;
pub mod masking;
mod puzzle_engine;
mod round;
pub mod scoring;
pub mod strategy;
pub mod turns;
pub mod validation;

pub use computer::{ComputerMove, choose_move};
pub use puzzle_engine::PuzzleEngine;
pub use round::{GuessReport, Outcome, Round};
pub use strategy::{PriorityStrategy, RandomStrategy, Strategy, StrategyType};
