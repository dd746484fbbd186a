//! Computer opponent turn policy
//!
//! Decides between solving, guessing a consonant and buying a vowel. Solving
//! means naming the first known puzzle that the current view could be.

use super::{PuzzleEngine, Round};
use crate::core::{Difficulty, EngineError, GuessType, Puzzle};
use rand::Rng;

/// A move chosen for the computer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputerMove {
    Guess(char, GuessType),
    Solve(String),
}

/// Whether the computer wants to solve this turn
///
/// Hard solves as soon as half the letters are showing; both levels solve
/// once there are no consonants left to guess.
#[must_use]
pub fn chooses_solve(
    engine: &PuzzleEngine,
    view: &str,
    difficulty: Difficulty,
    unguessed_consonants: &str,
) -> bool {
    unguessed_consonants.is_empty()
        || (difficulty == Difficulty::Hard && engine.half_revealed(view))
}

/// First known puzzle consistent with the view, skipping rejected attempts
#[must_use]
pub fn solve_attempt<'a>(
    engine: &PuzzleEngine,
    known_puzzles: &'a [Puzzle],
    view: &str,
    rejected: &[String],
) -> Option<&'a Puzzle> {
    known_puzzles.iter().find(|candidate| {
        !rejected.iter().any(|r| r == candidate.text()) && engine.is_match(candidate.text(), view)
    })
}

/// Pick the computer's move for the current round
///
/// Falls back to a letter guess when no known puzzle fits the view, and to
/// buying the first unguessed vowel once consonants run out.
///
/// # Errors
/// Returns `EngineError::NoVowelsLeft` if no move is possible, which only
/// happens for a round that is already won.
pub fn choose_move<R: Rng + ?Sized>(
    engine: &PuzzleEngine,
    round: &Round,
    difficulty: Difficulty,
    known_puzzles: &[Puzzle],
    rng: &mut R,
) -> Result<ComputerMove, EngineError> {
    let view = round.view();
    let consonants = round.unguessed_consonants();

    if chooses_solve(engine, view, difficulty, consonants)
        && let Some(puzzle) = solve_attempt(engine, known_puzzles, view, round.failed_solves())
    {
        return Ok(ComputerMove::Solve(puzzle.text().to_string()));
    }

    if !consonants.is_empty() {
        let letter = engine.guess_letter(consonants, difficulty, rng)?;
        return Ok(ComputerMove::Guess(letter, GuessType::Consonant));
    }

    round
        .unguessed_vowels()
        .chars()
        .next()
        .map(|vowel| ComputerMove::Guess(vowel, GuessType::Vowel))
        .ok_or(EngineError::NoVowelsLeft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzles(engine: &PuzzleEngine, texts: &[&str]) -> Vec<Puzzle> {
        texts
            .iter()
            .map(|t| Puzzle::new(*t, engine.config()).unwrap())
            .collect()
    }

    #[test]
    fn hard_solves_once_half_revealed() {
        let engine = PuzzleEngine::default();
        assert!(chooses_solve(&engine, "app^^", Difficulty::Hard, "bcd"));
        assert!(!chooses_solve(&engine, "a^^^^", Difficulty::Hard, "bcd"));
        assert!(!chooses_solve(&engine, "app^^", Difficulty::Easy, "bcd"));
    }

    #[test]
    fn everyone_solves_without_consonants() {
        let engine = PuzzleEngine::default();
        assert!(chooses_solve(&engine, "^^^^^", Difficulty::Easy, ""));
    }

    #[test]
    fn solve_attempt_skips_mismatches_and_rejections() {
        let engine = PuzzleEngine::default();
        let known = puzzles(&engine, &["apply", "apple", "ample"]);

        let first = solve_attempt(&engine, &known, "app^^", &[]).unwrap();
        assert_eq!(first.text(), "apply");

        let second = solve_attempt(&engine, &known, "app^^", &["apply".to_string()]).unwrap();
        assert_eq!(second.text(), "apple");

        assert!(solve_attempt(&engine, &known, "^^^^^^", &[]).is_none());
    }

    #[test]
    fn hard_computer_guesses_priority_consonant_early() {
        let engine = PuzzleEngine::default();
        let known = puzzles(&engine, &["start"]);
        let round = Round::new(&engine, &known[0], (0, 0), Player::Two);
        let mut rng = StdRng::seed_from_u64(5);

        let chosen = choose_move(&engine, &round, Difficulty::Hard, &known, &mut rng).unwrap();
        assert_eq!(chosen, ComputerMove::Guess('t', GuessType::Consonant));
    }

    #[test]
    fn hard_computer_solves_with_known_puzzle() {
        let engine = PuzzleEngine::default();
        let known = puzzles(&engine, &["start"]);
        let round = Round::new(&engine, &known[0], (0, 0), Player::Two);
        let round = round.apply_guess(&engine, 't', GuessType::Consonant).unwrap().round;
        let round = round.apply_guess(&engine, 's', GuessType::Consonant).unwrap().round;
        let mut rng = StdRng::seed_from_u64(5);

        let chosen = choose_move(&engine, &round, Difficulty::Hard, &known, &mut rng).unwrap();
        assert_eq!(chosen, ComputerMove::Solve("start".to_string()));
    }

    #[test]
    fn buys_vowel_when_consonants_exhausted_and_no_candidate() {
        let engine = PuzzleEngine::default();
        let puzzle = Puzzle::new("io", engine.config()).unwrap();
        let mut round = Round::new(&engine, &puzzle, (0, 0), Player::One);
        for consonant in engine.config().consonants.clone().chars() {
            round = round
                .apply_guess(&engine, consonant, GuessType::Consonant)
                .unwrap()
                .round;
        }
        let mut rng = StdRng::seed_from_u64(5);

        let chosen = choose_move(&engine, &round, Difficulty::Easy, &[], &mut rng).unwrap();
        assert_eq!(chosen, ComputerMove::Guess('a', GuessType::Vowel));
    }
}
