//! Formatting utilities for terminal output

use crate::core::PuzzleConfig;
use colored::Colorize;

/// Render a view with revealed letters highlighted and placeholders dimmed
#[must_use]
pub fn colorize_view(config: &PuzzleConfig, view: &str) -> String {
    view.chars()
        .map(|c| {
            let s = c.to_string();
            if c == config.hidden {
                s.bright_black().to_string()
            } else if config.is_letter(c) {
                s.bright_green().bold().to_string()
            } else {
                s
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_keeps_every_character() {
        colored::control::set_override(false);
        let config = PuzzleConfig::default();
        assert_eq!(colorize_view(&config, "^a'^"), "^a'^");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percentage_of_empty_total() {
        assert!((percentage(3, 0) - 0.0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
