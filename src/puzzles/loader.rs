//! Puzzle list loading utilities
//!
//! Provides functions to load puzzles from files or use the embedded list.

use crate::core::{Puzzle, PuzzleConfig};
use log::warn;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load puzzles from a file, one per line
///
/// Blank lines are skipped. Lines that are not valid puzzles are logged and
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use phrase_puzzler::core::PuzzleConfig;
/// use phrase_puzzler::puzzles::loader::load_from_file;
///
/// let puzzles = load_from_file("puzzles.txt", &PuzzleConfig::default()).unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &PuzzleConfig) -> io::Result<Vec<Puzzle>> {
    let content = fs::read_to_string(path)?;
    Ok(puzzles_from_str(&content, config))
}

/// Parse newline-separated puzzle text
#[must_use]
pub fn puzzles_from_str(content: &str, config: &PuzzleConfig) -> Vec<Puzzle> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| match Puzzle::new(line, config) {
            Ok(puzzle) => Some(puzzle),
            Err(e) => {
                warn!("skipping puzzle on line {}: {e}", number + 1);
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Puzzle vector
///
/// # Examples
/// ```
/// use phrase_puzzler::core::PuzzleConfig;
/// use phrase_puzzler::puzzles::loader::puzzles_from_slice;
/// use phrase_puzzler::puzzles::PUZZLES;
///
/// let puzzles = puzzles_from_slice(PUZZLES, &PuzzleConfig::default());
/// assert_eq!(puzzles.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn puzzles_from_slice(slice: &[&str], config: &PuzzleConfig) -> Vec<Puzzle> {
    slice
        .iter()
        .filter_map(|&s| Puzzle::new(s, config).ok())
        .collect()
}

/// Pick a puzzle at random
///
/// Returns `None` if the list is empty.
pub fn choose<'a, R: Rng + ?Sized>(puzzles: &'a [Puzzle], rng: &mut R) -> Option<&'a Puzzle> {
    puzzles.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn puzzles_from_str_skips_blank_and_invalid() {
        let config = PuzzleConfig::default();
        let content = "break a leg\n\n   \n123\nIT'S A PIECE OF CAKE\n";
        let puzzles = puzzles_from_str(content, &config);

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].text(), "break a leg");
        assert_eq!(puzzles[1].text(), "it's a piece of cake");
    }

    #[test]
    fn puzzles_from_slice_converts_valid_puzzles() {
        let config = PuzzleConfig::default();
        let puzzles = puzzles_from_slice(&["easy does it", "", "so far so good"], &config);
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[1].text(), "so far so good");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let config = PuzzleConfig::default();
        assert!(load_from_file("/definitely/not/here/puzzles.txt", &config).is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        use std::io::Write;

        let config = PuzzleConfig::default();
        let path = std::env::temp_dir().join("phrase_puzzler_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "miss the boat").unwrap();
            writeln!(file, "on the ball").unwrap();
        }

        let puzzles = load_from_file(&path, &config).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].text(), "miss the boat");
    }

    #[test]
    fn choose_is_seeded() {
        let config = PuzzleConfig::default();
        let puzzles = puzzles_from_slice(&["a b", "c d", "e f", "g h"], &config);

        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);
        assert_eq!(choose(&puzzles, &mut rng_a), choose(&puzzles, &mut rng_b));
        assert!(choose(&[], &mut rng_a).is_none());
    }
}
