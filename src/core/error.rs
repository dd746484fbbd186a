//! Engine error type
//!
//! Every variant is a caller contract violation. Operations report them instead
//! of returning a silently wrong view or score.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("puzzle has {puzzle} characters but view has {view}")]
    LengthMismatch { puzzle: usize, view: usize },

    #[error("unknown guess type '{0}' (expected C or V)")]
    InvalidGuessType(char),

    #[error("unknown menu selection '{0}' (expected C, V, S or Q)")]
    InvalidSelection(char),

    #[error("unknown difficulty '{0}' (expected E or H)")]
    InvalidDifficulty(char),

    #[error("unknown game type '{0}' (expected 1, 2 or 3)")]
    InvalidGameType(char),

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("no unguessed consonants left to choose from")]
    NoConsonantsLeft,

    #[error("no unguessed vowels left to buy")]
    NoVowelsLeft,

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(char),

    #[error("'{letter}' is not a {expected}")]
    WrongLetterClass { letter: char, expected: &'static str },

    #[error("placeholder '{0}' is a letter and would be mistaken for a revealed one")]
    InvalidPlaceholder(char),
}
