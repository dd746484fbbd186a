//! Game configuration
//!
//! Every constant the rules depend on lives in one immutable value, so several
//! games with different settings can run side by side.

use super::EngineError;

/// Immutable rule configuration shared by every engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Character shown in place of a letter that has not been guessed
    pub hidden: char,
    /// Vowel alphabet
    pub vowels: String,
    /// Consonant alphabet
    pub consonants: String,
    /// Points deducted for every vowel purchase
    pub vowel_price: i32,
    /// Points awarded per hidden occurrence of an unguessed consonant on solve
    pub consonant_bonus: i32,
    /// Order in which a hard computer player tries consonants
    pub priority_consonants: String,
    /// Display names of the two seats, in seat order
    pub player_names: [String; 2],
}

impl PuzzleConfig {
    /// Replace the placeholder character
    #[must_use]
    pub fn with_hidden(mut self, hidden: char) -> Self {
        self.hidden = hidden;
        self
    }

    /// Replace the vowel price
    #[must_use]
    pub const fn with_vowel_price(mut self, vowel_price: i32) -> Self {
        self.vowel_price = vowel_price;
        self
    }

    /// Replace the consonant bonus
    #[must_use]
    pub const fn with_consonant_bonus(mut self, consonant_bonus: i32) -> Self {
        self.consonant_bonus = consonant_bonus;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch)
    }

    #[inline]
    #[must_use]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(ch)
    }

    /// Check that the placeholder cannot be confused with a letter
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPlaceholder` if `hidden` is a vowel or
    /// consonant.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.is_letter(self.hidden) {
            return Err(EngineError::InvalidPlaceholder(self.hidden));
        }
        Ok(())
    }

    /// Check whether a character belongs to either alphabet
    ///
    /// Anything else (spaces, punctuation, digits) is always visible in a view.
    #[inline]
    #[must_use]
    pub fn is_letter(&self, ch: char) -> bool {
        self.is_consonant(ch) || self.is_vowel(ch)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            hidden: '^',
            vowels: "aeiou".to_string(),
            consonants: "bcdfghjklmnpqrstvwxyz".to_string(),
            vowel_price: 1,
            consonant_bonus: 2,
            priority_consonants: "tnrslhdcmpfgybwvkqxjz".to_string(),
            player_names: ["Player One".to_string(), "Player Two".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabets_partition_lowercase_letters() {
        let config = PuzzleConfig::default();
        for ch in 'a'..='z' {
            assert!(
                config.is_vowel(ch) ^ config.is_consonant(ch),
                "'{ch}' must be exactly one of vowel or consonant"
            );
        }
    }

    #[test]
    fn priority_order_covers_every_consonant_once() {
        let config = PuzzleConfig::default();
        assert_eq!(config.priority_consonants.len(), 21);

        let mut sorted: Vec<char> = config.priority_consonants.chars().collect();
        sorted.sort_unstable();
        let sorted: String = sorted.into_iter().collect();
        assert_eq!(sorted, config.consonants);
    }

    #[test]
    fn non_letters_are_not_letters() {
        let config = PuzzleConfig::default();
        for ch in [' ', '\'', '9', '-', '^', 'A'] {
            assert!(!config.is_letter(ch), "'{ch}' should not be a letter");
        }
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = PuzzleConfig::default()
            .with_hidden('_')
            .with_vowel_price(250)
            .with_consonant_bonus(5);

        assert_eq!(config.hidden, '_');
        assert_eq!(config.vowel_price, 250);
        assert_eq!(config.consonant_bonus, 5);
        assert_eq!(config.vowels, "aeiou");
    }

    #[test]
    fn letter_placeholder_is_rejected() {
        let config = PuzzleConfig::default().with_hidden('e');
        assert_eq!(config.validate(), Err(EngineError::InvalidPlaceholder('e')));
        assert!(PuzzleConfig::default().with_hidden('t').validate().is_err());
    }

    #[test]
    fn non_letter_placeholders_are_accepted() {
        assert_eq!(PuzzleConfig::default().validate(), Ok(()));
        assert_eq!(PuzzleConfig::default().with_hidden('_').validate(), Ok(()));
        assert_eq!(PuzzleConfig::default().with_hidden('E').validate(), Ok(()));
    }
}
