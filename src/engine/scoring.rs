//! Score arithmetic
//!
//! Consonants earn one point per occurrence. Vowels cost a flat price whether
//! or not they appear. Solving earns a bonus for consonants nobody guessed.

use super::masking::ensure_same_length;
use crate::core::{EngineError, GuessType, Player, PuzzleConfig};

/// Score after a single letter guess
///
/// # Examples
/// ```
/// use phrase_puzzler::core::{GuessType, PuzzleConfig};
/// use phrase_puzzler::engine::scoring::calculate_score;
///
/// let config = PuzzleConfig::default();
/// assert_eq!(calculate_score(&config, 3, 2, GuessType::Consonant), 5);
/// assert_eq!(calculate_score(&config, 3, 4, GuessType::Vowel), 2);
/// ```
#[must_use]
pub fn calculate_score(
    config: &PuzzleConfig,
    current_score: i32,
    occurrences: usize,
    guess_type: GuessType,
) -> i32 {
    match guess_type {
        GuessType::Vowel => current_score - config.vowel_price,
        GuessType::Consonant => current_score + occurrences as i32,
    }
}

/// Score at the end of a round
///
/// Adds the consonant bonus once per puzzle position holding a consonant that
/// is still in `unguessed_consonants`.
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if puzzle and view differ in length.
pub fn finalize_score(
    config: &PuzzleConfig,
    puzzle: &str,
    view: &str,
    unguessed_consonants: &str,
    current_score: i32,
) -> Result<i32, EngineError> {
    ensure_same_length(puzzle, view)?;

    let hidden_consonants = puzzle
        .chars()
        .filter(|&c| unguessed_consonants.contains(c))
        .count() as i32;

    Ok(current_score + hidden_consonants * config.consonant_bonus)
}

/// Replace the current player's score, leaving the other untouched
#[must_use]
pub const fn update_score(
    player_one_score: i32,
    player_two_score: i32,
    new_score: i32,
    current_player: Player,
) -> (i32, i32) {
    match current_player {
        Player::One => (new_score, player_two_score),
        Player::Two => (player_one_score, new_score),
    }
}
