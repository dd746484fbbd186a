//! Main puzzle engine interface

use super::{masking, scoring, strategy, turns, validation};
use crate::core::{Difficulty, EngineError, GuessType, Player, PuzzleConfig, Selection};
use log::debug;
use rand::Rng;

/// Phrase Puzzler rule engine
///
/// Holds the immutable configuration and exposes every rule as a pure
/// operation. The caller owns the round state and threads it between calls.
#[derive(Debug, Clone, Default)]
pub struct PuzzleEngine {
    config: PuzzleConfig,
}

impl PuzzleEngine {
    /// Create a new engine with the given configuration
    #[must_use]
    pub const fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// Create an engine after checking the configuration
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPlaceholder` if the placeholder is a letter.
    pub fn try_new(config: PuzzleConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Fully masked view of a puzzle
    #[must_use]
    pub fn get_view(&self, puzzle: &str) -> String {
        masking::get_view(&self.config, puzzle)
    }

    /// Reveal a guessed letter in the view
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if puzzle and view differ in length.
    pub fn update_view(
        &self,
        puzzle: &str,
        view: &str,
        guessed_letter: char,
    ) -> Result<String, EngineError> {
        let updated = masking::update_view(puzzle, view, guessed_letter)?;
        debug!("revealed '{guessed_letter}': {view} -> {updated}");
        Ok(updated)
    }

    /// Remove a guessed letter from the unguessed collections
    #[must_use]
    pub fn make_guessed(
        &self,
        unguessed_consonants: &str,
        unguessed_vowels: &str,
        guessed_letter: char,
    ) -> (String, String) {
        masking::make_guessed(unguessed_consonants, unguessed_vowels, guessed_letter)
    }

    /// Number of times a letter appears in the puzzle
    #[must_use]
    pub fn count_occurrences(&self, puzzle: &str, letter: char) -> usize {
        masking::count_occurrences(puzzle, letter)
    }

    /// Score after one letter guess
    #[must_use]
    pub fn calculate_score(
        &self,
        current_score: i32,
        occurrences: usize,
        guess_type: GuessType,
    ) -> i32 {
        let score = scoring::calculate_score(&self.config, current_score, occurrences, guess_type);
        debug!(
            "{} with {occurrences} occurrence(s): {current_score} -> {score}",
            guess_type.label()
        );
        score
    }

    /// Score at the end of a round, with the unguessed consonant bonus
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if puzzle and view differ in length.
    pub fn finalize_score(
        &self,
        puzzle: &str,
        view: &str,
        unguessed_consonants: &str,
        current_score: i32,
    ) -> Result<i32, EngineError> {
        let score =
            scoring::finalize_score(&self.config, puzzle, view, unguessed_consonants, current_score)?;
        debug!("final score: {current_score} -> {score}");
        Ok(score)
    }

    /// Replace the current player's score
    #[must_use]
    pub const fn update_score(
        &self,
        player_one_score: i32,
        player_two_score: i32,
        new_score: i32,
        current_player: Player,
    ) -> (i32, i32) {
        scoring::update_score(player_one_score, player_two_score, new_score, current_player)
    }

    /// Player who guesses next
    #[must_use]
    pub fn next_player(&self, current_player: Player, letter_occurrences: usize) -> Player {
        let next = turns::next_player(current_player, letter_occurrences);
        if next != current_player {
            debug!(
                "turn passes from {} to {}",
                current_player.name(&self.config),
                next.name(&self.config)
            );
        }
        next
    }

    /// Computer's consonant for a difficulty level
    ///
    /// # Errors
    /// Returns `EngineError::NoConsonantsLeft` if there is nothing to choose.
    pub fn guess_letter<R: Rng + ?Sized>(
        &self,
        unguessed_consonants: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<char, EngineError> {
        let letter = strategy::guess_letter(&self.config, unguessed_consonants, difficulty, rng)?;
        debug!("computer ({difficulty}) guesses '{letter}'");
        Ok(letter)
    }

    #[must_use]
    pub fn is_win(&self, puzzle: &str, view: &str) -> bool {
        validation::is_win(puzzle, view)
    }

    #[must_use]
    pub fn game_over(&self, puzzle: &str, view: &str, current_selection: Selection) -> bool {
        validation::game_over(puzzle, view, current_selection)
    }

    #[must_use]
    pub fn half_revealed(&self, view: &str) -> bool {
        validation::half_revealed(&self.config, view)
    }

    #[must_use]
    pub fn is_match(&self, puzzle: &str, view: &str) -> bool {
        validation::is_match(&self.config, puzzle, view)
    }
}
