//! Fixture check command
//!
//! Validates `puzzle|view` pairs with the consistency checker and reports
//! every view that could not belong to its puzzle.

use crate::engine::PuzzleEngine;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Separator between puzzle and view on a fixture line
pub const FIXTURE_SEPARATOR: char = '|';

/// Outcome of checking a single fixture line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub line: usize,
    pub puzzle: String,
    pub view: String,
    pub matches: bool,
}

/// Result of checking a fixture file
#[derive(Debug, Default)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
    /// Line numbers without a separator
    pub malformed: Vec<usize>,
}

impl CheckReport {
    /// Entries whose view does not match the puzzle
    pub fn mismatches(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|entry| !entry.matches)
    }

    /// True iff every line parsed and every view matched
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.malformed.is_empty() && self.entries.iter().all(|entry| entry.matches)
    }
}

/// Check fixture text
///
/// One `puzzle|view` pair per line. Blank lines and lines starting with `#`
/// are ignored. Only the separator is stripped; spaces around it belong to
/// the puzzle and view.
#[must_use]
pub fn check_fixtures(engine: &PuzzleEngine, content: &str) -> CheckReport {
    let mut report = CheckReport::default();

    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some((puzzle, view)) = line.split_once(FIXTURE_SEPARATOR) else {
            report.malformed.push(number);
            continue;
        };

        let matches = engine.is_match(puzzle, view);
        debug!("line {number}: {puzzle:?} vs {view:?} -> {matches}");

        report.entries.push(CheckEntry {
            line: number,
            puzzle: puzzle.to_string(),
            view: view.to_string(),
            matches,
        });
    }

    report
}

/// Check a fixture file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn check_file<P: AsRef<Path>>(engine: &PuzzleEngine, path: P) -> Result<CheckReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture file {}", path.display()))?;

    Ok(check_fixtures(engine, &content))
}
