//! Computer guess strategies
//!
//! Defines the Strategy trait and the two difficulty implementations.

use crate::core::{Difficulty, EngineError, PuzzleConfig};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A policy for choosing the computer's next consonant
pub trait Strategy {
    /// Pick a consonant from `unguessed_consonants`
    ///
    /// Returns `None` if nothing can be picked.
    fn select_consonant<R: Rng + ?Sized>(
        &self,
        unguessed_consonants: &str,
        rng: &mut R,
    ) -> Option<char>;
}

/// Enum wrapper for the difficulty strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Random selection (easy)
    Random(RandomStrategy),
    /// Frequency order selection (hard)
    Priority(PriorityStrategy<'a>),
}

impl<'a> StrategyType<'a> {
    /// Build the strategy for a difficulty level
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty, config: &'a PuzzleConfig) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Random(RandomStrategy),
            Difficulty::Hard => Self::Priority(PriorityStrategy::new(&config.priority_consonants)),
        }
    }
}

impl Strategy for StrategyType<'_> {
    fn select_consonant<R: Rng + ?Sized>(
        &self,
        unguessed_consonants: &str,
        rng: &mut R,
    ) -> Option<char> {
        match self {
            Self::Random(s) => s.select_consonant(unguessed_consonants, rng),
            Self::Priority(s) => s.select_consonant(unguessed_consonants, rng),
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the distinct unguessed consonants.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_consonant<R: Rng + ?Sized>(
        &self,
        unguessed_consonants: &str,
        rng: &mut R,
    ) -> Option<char> {
        let mut letters: Vec<char> = unguessed_consonants.chars().collect();
        letters.sort_unstable();
        letters.dedup();

        letters.choose(rng).copied()
    }
}

/// Priority strategy
///
/// Returns the first consonant of a fixed frequency order that is still
/// unguessed. Never touches the random source.
pub struct PriorityStrategy<'a> {
    order: &'a str,
}

impl<'a> PriorityStrategy<'a> {
    #[must_use]
    pub const fn new(order: &'a str) -> Self {
        Self { order }
    }
}

impl Strategy for PriorityStrategy<'_> {
    fn select_consonant<R: Rng + ?Sized>(
        &self,
        unguessed_consonants: &str,
        _rng: &mut R,
    ) -> Option<char> {
        self.order.chars().find(|&c| unguessed_consonants.contains(c))
    }
}

/// Choose the computer's consonant for a difficulty level
///
/// # Errors
/// Returns `EngineError::NoConsonantsLeft` if `unguessed_consonants` is empty,
/// or if none of them appear in the priority order on Hard.
///
/// # Examples
/// ```
/// use phrase_puzzler::core::{Difficulty, PuzzleConfig};
/// use phrase_puzzler::engine::strategy::guess_letter;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let config = PuzzleConfig::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(guess_letter(&config, "pssng", Difficulty::Hard, &mut rng), Ok('n'));
/// ```
pub fn guess_letter<R: Rng + ?Sized>(
    config: &PuzzleConfig,
    unguessed_consonants: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<char, EngineError> {
    StrategyType::for_difficulty(difficulty, config)
        .select_consonant(unguessed_consonants, rng)
        .ok_or(EngineError::NoConsonantsLeft)
}
