//! Round state threading
//!
//! A `Round` is a plain value holding everything that changes during one
//! puzzle. Each move returns the next `Round` built from the pure engine
//! operations; the previous value is left untouched.

use super::PuzzleEngine;
use crate::core::{EngineError, GuessType, Player, Puzzle};
use log::info;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player revealed or solved the whole puzzle
    Solved(Player),
    Quit,
}

/// Result of a single letter guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub letter: char,
    pub guess_type: GuessType,
    pub occurrences: usize,
    pub round: Round,
}

/// Complete mutable state of one puzzle, as an immutable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    puzzle: String,
    view: String,
    unguessed_consonants: String,
    unguessed_vowels: String,
    scores: (i32, i32),
    current_player: Player,
    failed_solves: Vec<String>,
    outcome: Option<Outcome>,
}

impl Round {
    /// Start a round with a fully masked view and every letter unguessed
    ///
    /// Scores are carried in from earlier rounds.
    #[must_use]
    pub fn new(engine: &PuzzleEngine, puzzle: &Puzzle, scores: (i32, i32), first: Player) -> Self {
        let config = engine.config();
        info!("new round: {} letters", puzzle.letter_count(config));

        Self {
            puzzle: puzzle.text().to_string(),
            view: engine.get_view(puzzle.text()),
            unguessed_consonants: config.consonants.clone(),
            unguessed_vowels: config.vowels.clone(),
            scores,
            current_player: first,
            failed_solves: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &str {
        &self.puzzle
    }

    #[must_use]
    pub fn view(&self) -> &str {
        &self.view
    }

    #[must_use]
    pub fn unguessed_consonants(&self) -> &str {
        &self.unguessed_consonants
    }

    #[must_use]
    pub fn unguessed_vowels(&self) -> &str {
        &self.unguessed_vowels
    }

    #[must_use]
    pub const fn scores(&self) -> (i32, i32) {
        self.scores
    }

    #[must_use]
    pub const fn score_of(&self, player: Player) -> i32 {
        match player {
            Player::One => self.scores.0,
            Player::Two => self.scores.1,
        }
    }

    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Solve attempts that were already rejected this round
    #[must_use]
    pub fn failed_solves(&self) -> &[String] {
        &self.failed_solves
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Guess a consonant or buy a vowel for the current player
    ///
    /// Revealing the last hidden letter ends the round in the guesser's
    /// favour, with the score finalized.
    ///
    /// # Errors
    /// - `WrongLetterClass` if the letter is not of the requested type
    /// - `AlreadyGuessed` if the letter was guessed earlier this round
    pub fn apply_guess(
        &self,
        engine: &PuzzleEngine,
        letter: char,
        guess_type: GuessType,
    ) -> Result<GuessReport, EngineError> {
        let config = engine.config();
        let letter = letter.to_ascii_lowercase();

        let (in_class, unguessed) = match guess_type {
            GuessType::Consonant => (config.is_consonant(letter), &self.unguessed_consonants),
            GuessType::Vowel => (config.is_vowel(letter), &self.unguessed_vowels),
        };
        if !in_class {
            return Err(EngineError::WrongLetterClass {
                letter,
                expected: guess_type.label(),
            });
        }
        if !unguessed.contains(letter) {
            return Err(EngineError::AlreadyGuessed(letter));
        }

        let player = self.current_player;
        let occurrences = engine.count_occurrences(&self.puzzle, letter);
        let view = engine.update_view(&self.puzzle, &self.view, letter)?;
        let (unguessed_consonants, unguessed_vowels) =
            engine.make_guessed(&self.unguessed_consonants, &self.unguessed_vowels, letter);

        let mut score = engine.calculate_score(self.score_of(player), occurrences, guess_type);
        let mut outcome = None;
        if engine.is_win(&self.puzzle, &view) {
            score = engine.finalize_score(&self.puzzle, &view, &unguessed_consonants, score)?;
            outcome = Some(Outcome::Solved(player));
            info!("{} revealed the last letter", player.name(config));
        }

        let round = Self {
            view,
            unguessed_consonants,
            unguessed_vowels,
            scores: engine.update_score(self.scores.0, self.scores.1, score, player),
            current_player: engine.next_player(player, occurrences),
            outcome,
            ..self.clone()
        };

        Ok(GuessReport {
            letter,
            guess_type,
            occurrences,
            round,
        })
    }

    /// Attempt to solve the whole puzzle for the current player
    ///
    /// A correct attempt reveals the puzzle and finalizes the solver's score
    /// with the bonus for consonants nobody guessed. A wrong attempt passes
    /// the turn. Returns the next round and whether the attempt was right.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the round state is corrupt.
    pub fn solve(&self, engine: &PuzzleEngine, attempt: &str) -> Result<(Self, bool), EngineError> {
        let attempt = attempt.trim().to_lowercase();
        let player = self.current_player;

        if attempt == self.puzzle {
            let score = engine.finalize_score(
                &self.puzzle,
                &self.view,
                &self.unguessed_consonants,
                self.score_of(player),
            )?;
            info!("{} solved the puzzle", player.name(engine.config()));

            let round = Self {
                view: self.puzzle.clone(),
                scores: engine.update_score(self.scores.0, self.scores.1, score, player),
                outcome: Some(Outcome::Solved(player)),
                ..self.clone()
            };
            return Ok((round, true));
        }

        let mut failed_solves = self.failed_solves.clone();
        failed_solves.push(attempt);
        let round = Self {
            current_player: engine.next_player(player, 0),
            failed_solves,
            ..self.clone()
        };
        Ok((round, false))
    }

    /// Give the turn to a specific player
    ///
    /// Used by single-player games, where a miss never hands control over.
    #[must_use]
    pub fn hand_to(&self, player: Player) -> Self {
        Self {
            current_player: player,
            ..self.clone()
        }
    }

    /// End the round immediately
    #[must_use]
    pub fn quit(&self) -> Self {
        info!("round abandoned");
        Self {
            outcome: Some(Outcome::Quit),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(text: &str) -> (PuzzleEngine, Round) {
        let engine = PuzzleEngine::default();
        let puzzle = Puzzle::new(text, engine.config()).unwrap();
        let round = Round::new(&engine, &puzzle, (0, 0), Player::One);
        (engine, round)
    }

    #[test]
    fn new_round_is_fully_masked() {
        let (engine, round) = start("it's");
        assert_eq!(round.view(), "^^'^");
        assert_eq!(round.unguessed_consonants(), engine.config().consonants);
        assert_eq!(round.unguessed_vowels(), "aeiou");
        assert_eq!(round.current_player(), Player::One);
        assert!(!round.is_over());
    }

    #[test]
    fn hit_scores_and_keeps_turn() {
        let (engine, round) = start("banana");
        let report = round.apply_guess(&engine, 'n', GuessType::Consonant).unwrap();

        assert_eq!(report.occurrences, 2);
        assert_eq!(report.round.view(), "^^n^n^");
        assert_eq!(report.round.scores(), (2, 0));
        assert_eq!(report.round.current_player(), Player::One);
        assert!(!report.round.unguessed_consonants().contains('n'));
        // the original round value is untouched
        assert_eq!(round.view(), "^^^^^^");
    }

    #[test]
    fn miss_passes_turn_without_penalty() {
        let (engine, round) = start("banana");
        let report = round.apply_guess(&engine, 'z', GuessType::Consonant).unwrap();

        assert_eq!(report.occurrences, 0);
        assert_eq!(report.round.scores(), (0, 0));
        assert_eq!(report.round.current_player(), Player::Two);
    }

    #[test]
    fn vowel_costs_even_on_hit() {
        let (engine, round) = start("banana");
        let report = round.apply_guess(&engine, 'A', GuessType::Vowel).unwrap();

        assert_eq!(report.letter, 'a');
        assert_eq!(report.round.view(), "^a^a^a");
        assert_eq!(report.round.scores(), (-1, 0));
        assert_eq!(report.round.current_player(), Player::One);
    }

    #[test]
    fn wrong_class_and_repeats_are_rejected() {
        let (engine, round) = start("banana");
        assert_eq!(
            round.apply_guess(&engine, 'a', GuessType::Consonant),
            Err(EngineError::WrongLetterClass {
                letter: 'a',
                expected: "consonant"
            })
        );
        assert!(round.apply_guess(&engine, '!', GuessType::Vowel).is_err());

        let next = round.apply_guess(&engine, 'n', GuessType::Consonant).unwrap().round;
        assert_eq!(
            next.apply_guess(&engine, 'n', GuessType::Consonant),
            Err(EngineError::AlreadyGuessed('n'))
        );
    }

    #[test]
    fn revealing_last_letter_wins() {
        let (engine, round) = start("ab");
        let round = round.apply_guess(&engine, 'b', GuessType::Consonant).unwrap().round;
        let report = round.apply_guess(&engine, 'a', GuessType::Vowel).unwrap();

        assert_eq!(report.round.view(), "ab");
        assert_eq!(report.round.outcome(), Some(Outcome::Solved(Player::One)));
        assert_eq!(report.round.scores(), (0, 0));
    }

    #[test]
    fn correct_solve_adds_bonus_for_unguessed_consonants() {
        let (engine, round) = start("banana");
        let round = round.apply_guess(&engine, 'a', GuessType::Vowel).unwrap().round;
        let (round, correct) = round.solve(&engine, " Banana ").unwrap();

        assert!(correct);
        assert_eq!(round.view(), "banana");
        // -1 for the vowel, +2 for 'b', +2 for each of the two 'n's
        assert_eq!(round.scores(), (5, 0));
        assert_eq!(round.outcome(), Some(Outcome::Solved(Player::One)));
    }

    #[test]
    fn wrong_solve_passes_turn_and_is_remembered() {
        let (engine, round) = start("banana");
        let (round, correct) = round.solve(&engine, "bandana").unwrap();

        assert!(!correct);
        assert_eq!(round.current_player(), Player::Two);
        assert_eq!(round.failed_solves(), ["bandana".to_string()]);
        assert!(!round.is_over());
    }

    #[test]
    fn quit_ends_round() {
        let (_, round) = start("banana");
        let round = round.quit();
        assert_eq!(round.outcome(), Some(Outcome::Quit));
        assert_eq!(round.view(), "^^^^^^");
    }

    #[test]
    fn hand_to_overrides_rotation() {
        let (engine, round) = start("banana");
        let round = round.apply_guess(&engine, 'z', GuessType::Consonant).unwrap().round;
        assert_eq!(round.current_player(), Player::Two);
        assert_eq!(round.hand_to(Player::One).current_player(), Player::One);
    }

    #[test]
    fn scores_carry_into_new_round() {
        let engine = PuzzleEngine::default();
        let puzzle = Puzzle::new("kiwi", engine.config()).unwrap();
        let round = Round::new(&engine, &puzzle, (7, -2), Player::Two);
        assert_eq!(round.score_of(Player::One), 7);
        assert_eq!(round.score_of(Player::Two), -2);
    }
}
