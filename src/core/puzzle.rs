//! Puzzle representation
//!
//! A Puzzle is the secret phrase for one round, normalized to lowercase.

use super::PuzzleConfig;
use std::fmt;
use thiserror::Error;

/// Validated secret phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    text: String,
}

/// Error type for rejected puzzle text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle is empty")]
    Empty,
    #[error("puzzle \"{0}\" contains no letters to guess")]
    NoLetters(String),
    #[error("puzzle \"{text}\" contains the placeholder '{hidden}'")]
    ContainsPlaceholder { text: String, hidden: char },
}

impl Puzzle {
    /// Create a new Puzzle from text
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased. Spaces,
    /// punctuation and digits are kept as they are.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the trimmed text is empty, has no letter
    /// from the configured alphabets, or contains the placeholder character.
    ///
    /// # Examples
    /// ```
    /// use phrase_puzzler::core::{Puzzle, PuzzleConfig};
    ///
    /// let config = PuzzleConfig::default();
    /// let puzzle = Puzzle::new("  It's Raining ", &config).unwrap();
    /// assert_eq!(puzzle.text(), "it's raining");
    ///
    /// assert!(Puzzle::new("   ", &config).is_err());
    /// assert!(Puzzle::new("1 + 2", &config).is_err());
    /// ```
    pub fn new(text: impl Into<String>, config: &PuzzleConfig) -> Result<Self, PuzzleError> {
        let text = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(PuzzleError::Empty);
        }

        if !text.chars().any(|c| config.is_letter(c)) {
            return Err(PuzzleError::NoLetters(text));
        }

        if text.contains(config.hidden) {
            return Err(PuzzleError::ContainsPlaceholder {
                text,
                hidden: config.hidden,
            });
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter positions (non-letters excluded)
    #[must_use]
    pub fn letter_count(&self, config: &PuzzleConfig) -> usize {
        self.text.chars().filter(|&c| config.is_letter(c)).count()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_is_trimmed_and_lowercased() {
        let config = PuzzleConfig::default();
        let puzzle = Puzzle::new("\tHello, World!\n", &config).unwrap();
        assert_eq!(puzzle.text(), "hello, world!");
        assert_eq!(format!("{puzzle}"), "hello, world!");
    }

    #[test]
    fn empty_puzzle_rejected() {
        let config = PuzzleConfig::default();
        assert_eq!(Puzzle::new("", &config), Err(PuzzleError::Empty));
        assert_eq!(Puzzle::new("   ", &config), Err(PuzzleError::Empty));
    }

    #[test]
    fn puzzle_without_letters_rejected() {
        let config = PuzzleConfig::default();
        assert!(matches!(
            Puzzle::new("42 - 7", &config),
            Err(PuzzleError::NoLetters(_))
        ));
    }

    #[test]
    fn puzzle_with_placeholder_rejected() {
        let config = PuzzleConfig::default();
        assert_eq!(
            Puzzle::new("up ^ away", &config),
            Err(PuzzleError::ContainsPlaceholder {
                text: "up ^ away".to_string(),
                hidden: '^',
            })
        );

        let underscored = PuzzleConfig::default().with_hidden('_');
        assert!(Puzzle::new("up ^ away", &underscored).is_ok());
        assert!(Puzzle::new("snake_case", &underscored).is_err());
    }

    #[test]
    fn letter_count_ignores_punctuation() {
        let config = PuzzleConfig::default();
        let puzzle = Puzzle::new("won't stop", &config).unwrap();
        assert_eq!(puzzle.letter_count(&config), 8);
    }
}
