//! View masking and reveal
//!
//! A view has one character per puzzle character: non-letters are copied,
//! letters are either revealed or replaced by the placeholder.

use crate::core::{EngineError, PuzzleConfig};

/// Build the fully masked view of a puzzle
///
/// # Examples
/// ```
/// use phrase_puzzler::core::PuzzleConfig;
/// use phrase_puzzler::engine::masking::get_view;
///
/// let config = PuzzleConfig::default();
/// assert_eq!(get_view(&config, "it's"), "^^'^");
/// assert_eq!(get_view(&config, "a 9"), "^ 9");
/// ```
#[must_use]
pub fn get_view(config: &PuzzleConfig, puzzle: &str) -> String {
    puzzle
        .chars()
        .map(|c| if config.is_letter(c) { config.hidden } else { c })
        .collect()
}

/// Reveal every occurrence of `guessed_letter` in the view
///
/// Positions that do not hold the guessed letter keep whatever the view
/// already shows, so applying the same letter twice changes nothing.
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if puzzle and view differ in length.
pub fn update_view(puzzle: &str, view: &str, guessed_letter: char) -> Result<String, EngineError> {
    ensure_same_length(puzzle, view)?;

    Ok(puzzle
        .chars()
        .zip(view.chars())
        .map(|(p, v)| if p == guessed_letter { guessed_letter } else { v })
        .collect())
}

/// Number of times a letter appears in the puzzle
#[must_use]
pub fn count_occurrences(puzzle: &str, letter: char) -> usize {
    puzzle.chars().filter(|&c| c == letter).count()
}

/// Remove a guessed letter from both unguessed collections
///
/// # Examples
/// ```
/// use phrase_puzzler::engine::masking::make_guessed;
///
/// assert_eq!(make_guessed("sdfjkl", "au", 'l'), ("sdfjk".to_string(), "au".to_string()));
/// assert_eq!(make_guessed("sd", "au", 'a'), ("sd".to_string(), "u".to_string()));
/// ```
#[must_use]
pub fn make_guessed(
    unguessed_consonants: &str,
    unguessed_vowels: &str,
    guessed_letter: char,
) -> (String, String) {
    (
        unguessed_consonants.replace(guessed_letter, ""),
        unguessed_vowels.replace(guessed_letter, ""),
    )
}

pub(crate) fn ensure_same_length(puzzle: &str, view: &str) -> Result<(), EngineError> {
    let (puzzle_len, view_len) = (puzzle.chars().count(), view.chars().count());
    if puzzle_len == view_len {
        Ok(())
    } else {
        Err(EngineError::LengthMismatch {
            puzzle: puzzle_len,
            view: view_len,
        })
    }
}
