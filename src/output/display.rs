//! Display functions for rounds and command results

use super::formatters::{colorize_view, create_progress_bar, percentage};
use crate::commands::{CheckReport, SimulationResult};
use crate::core::{Player, PuzzleConfig};
use crate::engine::{GuessReport, Outcome, Round};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: view, scores, letters left and whose turn it is
///
/// # Errors
///
/// Returns any error from the output stream.
pub fn write_round_status<W: Write>(out: &mut W, config: &PuzzleConfig, round: &Round) -> io::Result<()> {
    let (one, two) = round.scores();

    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "  {}", colorize_view(config, round.view()))?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "  {}: {}   {}: {}",
        Player::One.name(config),
        one.to_string().bright_yellow(),
        Player::Two.name(config),
        two.to_string().bright_yellow()
    )?;
    writeln!(
        out,
        "  Consonants left: {}   Vowels left: {}",
        round.unguessed_consonants(),
        round.unguessed_vowels()
    )?;
    writeln!(
        out,
        "{} to play",
        round.current_player().name(config).bright_cyan().bold()
    )
}

/// Write what a letter guess revealed
///
/// # Errors
///
/// Returns any error from the output stream.
pub fn write_guess_report<W: Write>(out: &mut W, report: &GuessReport) -> io::Result<()> {
    match report.occurrences {
        0 => writeln!(out, "{}", format!("No '{}' in the puzzle.", report.letter).red()),
        1 => writeln!(out, "{}", format!("There is one '{}'.", report.letter).green()),
        n => writeln!(out, "{}", format!("There are {n} '{}'s.", report.letter).green()),
    }
}

/// Write the end of a round
///
/// # Errors
///
/// Returns any error from the output stream.
pub fn write_round_result<W: Write>(out: &mut W, config: &PuzzleConfig, round: &Round) -> io::Result<()> {
    let (one, two) = round.scores();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match round.outcome() {
        Some(Outcome::Solved(player)) => writeln!(
            out,
            "  {}",
            format!("{} wins!", player.name(config)).bright_green().bold()
        )?,
        Some(Outcome::Quit) => writeln!(out, "  {}", "Round abandoned.".yellow())?,
        None => {}
    }
    writeln!(out, "  The puzzle was: {}", round.puzzle().bright_white().bold())?;
    writeln!(
        out,
        "  Final scores: {} {}, {} {}",
        Player::One.name(config),
        one,
        Player::Two.name(config),
        two
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the result of a fixture check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FIXTURE CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let failures: Vec<_> = report.mismatches().collect();
    println!("\n   Lines checked:  {}", report.entries.len());
    println!(
        "   Matching:       {}",
        (report.entries.len() - failures.len()).to_string().green()
    );
    println!("   Mismatched:     {}", failures.len().to_string().red());
    println!("   Malformed:      {}", report.malformed.len().to_string().red());

    for entry in &failures {
        println!(
            "   {} line {}: {:?} cannot show {:?}",
            "✗".red(),
            entry.line,
            entry.puzzle,
            entry.view
        );
    }
    for line in &report.malformed {
        println!("   {} line {line}: expected puzzle|view", "✗".red());
    }

    if report.all_passed() {
        println!("\n{}", "All views are consistent.".green().bold());
    }
}

/// Print simulation results side by side
pub fn print_simulation_results(results: &[SimulationResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        let one_share = percentage(result.player_one_wins, result.rounds);
        let bar = create_progress_bar(one_share, 100.0, 30);

        println!("\n📊 {}", format!("{} computer", result.difficulty).bright_cyan().bold());
        println!("   Rounds played:    {}", result.rounds);
        println!(
            "   Average turns:    {}",
            format!("{:.2}", result.average_turns).bright_yellow().bold()
        );
        println!(
            "   Fastest round:    {}",
            result.min_turns.to_string().green()
        );
        println!(
            "   Slowest round:    {}",
            result.max_turns.to_string().yellow()
        );
        println!("   Winning score:    {:.2}", result.average_winning_score);
        println!(
            "   Player One wins:  [{}] {one_share:5.1}% ({} vs {})",
            bar.green(),
            result.player_one_wins,
            result.player_two_wins
        );
        println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    }
}
