//! Closed sets used by the rules: players, guess types, difficulty levels,
//! menu selections and game types.

use super::{EngineError, PuzzleConfig};
use std::fmt;
use std::str::FromStr;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who takes over after a miss
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Seat index into per-player arrays
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Display name configured for this seat
    #[must_use]
    pub fn name(self, config: &PuzzleConfig) -> &str {
        &config.player_names[self.index()]
    }

    /// Resolve a configured display name back to a seat
    ///
    /// # Errors
    /// Returns `EngineError::UnknownPlayer` for any name other than the two
    /// configured ones.
    pub fn from_name(name: &str, config: &PuzzleConfig) -> Result<Self, EngineError> {
        [Self::One, Self::Two]
            .into_iter()
            .find(|player| player.name(config) == name)
            .ok_or_else(|| EngineError::UnknownPlayer(name.to_string()))
    }
}

/// Which alphabet a guess is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessType {
    Consonant,
    Vowel,
}

impl GuessType {
    /// Parse a menu tag ('C' or 'V', any case)
    ///
    /// # Errors
    /// Returns `EngineError::InvalidGuessType` for any other tag.
    pub const fn from_tag(tag: char) -> Result<Self, EngineError> {
        match tag.to_ascii_uppercase() {
            'C' => Ok(Self::Consonant),
            'V' => Ok(Self::Vowel),
            _ => Err(EngineError::InvalidGuessType(tag)),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::Vowel => "vowel",
        }
    }
}

/// Computer opponent strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Uniform random pick among unguessed consonants
    Easy,
    /// First unguessed consonant in frequency order
    Hard,
}

impl Difficulty {
    /// Parse a tag ('E' or 'H', any case)
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDifficulty` for any other tag.
    pub const fn from_tag(tag: char) -> Result<Self, EngineError> {
        match tag.to_ascii_uppercase() {
            'E' => Ok(Self::Easy),
            'H' => Ok(Self::Hard),
            _ => Err(EngineError::InvalidDifficulty(tag)),
        }
    }

    /// Escalate Easy to Hard once the view is at least half revealed
    ///
    /// Hard never drops back to Easy.
    #[must_use]
    pub const fn escalate(self, half_revealed: bool) -> Self {
        if half_revealed { Self::Hard } else { self }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.chars().next().unwrap_or(' '))),
        }
    }
}

/// A choice from the turn menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Consonant,
    Vowel,
    Solve,
    Quit,
}

impl Selection {
    /// Parse a menu tag ('C', 'V', 'S' or 'Q', any case)
    ///
    /// # Errors
    /// Returns `EngineError::InvalidSelection` for any other tag.
    pub const fn from_tag(tag: char) -> Result<Self, EngineError> {
        match tag.to_ascii_uppercase() {
            'C' => Ok(Self::Consonant),
            'V' => Ok(Self::Vowel),
            'S' => Ok(Self::Solve),
            'Q' => Ok(Self::Quit),
            _ => Err(EngineError::InvalidSelection(tag)),
        }
    }

    /// The guess type a selection implies, if it is a letter guess
    #[must_use]
    pub const fn guess_type(self) -> Option<GuessType> {
        match self {
            Self::Consonant => Some(GuessType::Consonant),
            Self::Vowel => Some(GuessType::Vowel),
            Self::Solve | Self::Quit => None,
        }
    }
}

/// Who sits at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    /// A single human plays both turns
    Solo,
    HumanHuman,
    /// Player Two is the computer
    HumanComputer,
}

impl GameType {
    /// Parse a menu tag ('1', '2' or '3')
    ///
    /// # Errors
    /// Returns `EngineError::InvalidGameType` for any other tag.
    pub const fn from_tag(tag: char) -> Result<Self, EngineError> {
        match tag {
            '1' => Ok(Self::Solo),
            '2' => Ok(Self::HumanHuman),
            '3' => Ok(Self::HumanComputer),
            _ => Err(EngineError::InvalidGameType(tag)),
        }
    }

    /// Whether the given seat is played by the computer
    #[must_use]
    pub const fn is_computer(self, player: Player) -> bool {
        matches!((self, player), (Self::HumanComputer, Player::Two))
    }
}

impl FromStr for GameType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "solo" => Ok(Self::Solo),
            "2" | "human" | "human-human" => Ok(Self::HumanHuman),
            "3" | "computer" | "human-computer" => Ok(Self::HumanComputer),
            _ => Err(EngineError::InvalidGameType(s.chars().next().unwrap_or(' '))),
        }
    }
}
