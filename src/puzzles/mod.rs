//! Puzzle lists
//!
//! Provides the embedded puzzle list compiled into the binary, plus file
//! loading and random selection.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
pub use loader::choose;
