//! Termination and view validation
//!
//! `is_win`, `game_over` and `half_revealed` are consulted every turn.
//! `is_match` checks that a view is a plausible partial reveal of a puzzle and
//! is used to vet fixtures and generated views.

use crate::core::{PuzzleConfig, Selection};
use rustc_hash::FxHashMap;

/// True iff every letter of the puzzle has been revealed
#[inline]
#[must_use]
pub fn is_win(puzzle: &str, view: &str) -> bool {
    puzzle == view
}

/// True iff the round is over, by win or by quitting
///
/// Quitting ends the round whatever state the view is in.
#[must_use]
pub fn game_over(puzzle: &str, view: &str, current_selection: Selection) -> bool {
    is_win(puzzle, view) || current_selection == Selection::Quit
}

/// True iff at least half of the letter positions in the view are revealed
///
/// Non-letters count toward neither side. A view without any letter
/// positions has nothing revealed and is not half revealed.
///
/// The placeholder is assumed never to occur in the puzzle itself;
/// `Puzzle::new` rejects such text.
///
/// # Examples
/// ```
/// use phrase_puzzler::core::PuzzleConfig;
/// use phrase_puzzler::engine::validation::half_revealed;
///
/// let config = PuzzleConfig::default();
/// assert!(half_revealed(&config, "app^^"));
/// assert!(!half_revealed(&config, "a^^^^"));
/// ```
#[must_use]
pub fn half_revealed(config: &PuzzleConfig, view: &str) -> bool {
    let (revealed, hidden) = view.chars().fold((0usize, 0usize), |(revealed, hidden), c| {
        if config.is_letter(c) {
            (revealed + 1, hidden)
        } else if c == config.hidden {
            (revealed, hidden + 1)
        } else {
            (revealed, hidden)
        }
    });

    let total = revealed + hidden;
    total > 0 && revealed * 2 >= total
}

/// True iff `view` could be the current view of `puzzle`
///
/// Every position must satisfy:
/// - a non-letter in the puzzle appears unchanged in the view
/// - a letter is either revealed at every one of its occurrences or hidden at
///   every one of them; partial reveals and wrong letters do not match
///
/// Views of a different length never match.
///
/// # Examples
/// ```
/// use phrase_puzzler::core::PuzzleConfig;
/// use phrase_puzzler::engine::validation::is_match;
///
/// let config = PuzzleConfig::default();
/// assert!(is_match(&config, "apple", "app^^"));
/// assert!(!is_match(&config, "apple", "ap^^^"));
/// assert!(!is_match(&config, "apple", "b^^"));
/// ```
#[must_use]
pub fn is_match(config: &PuzzleConfig, puzzle: &str, view: &str) -> bool {
    let puzzle: Vec<char> = puzzle.chars().collect();
    let view: Vec<char> = view.chars().collect();

    if puzzle.len() != view.len() {
        return false;
    }

    // Reveal state of each letter, fixed by its first occurrence
    let mut revealed: FxHashMap<char, bool> = FxHashMap::default();

    for (&p, &v) in puzzle.iter().zip(&view) {
        if !config.is_letter(p) {
            if p != v {
                return false;
            }
            continue;
        }

        let shown = if v == p {
            true
        } else if v == config.hidden {
            false
        } else {
            return false;
        };

        if *revealed.entry(p).or_insert(shown) != shown {
            return false;
        }
    }

    true
}
