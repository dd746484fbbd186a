//! Turn rotation

use crate::core::Player;

/// Decide who guesses next
///
/// A guess that matched at least one letter keeps the turn; a miss passes
/// it to the other player.
#[must_use]
pub const fn next_player(current_player: Player, letter_occurrences: usize) -> Player {
    if letter_occurrences > 0 {
        current_player
    } else {
        current_player.other()
    }
}
