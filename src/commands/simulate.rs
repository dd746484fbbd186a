//! Simulation command
//!
//! Plays computer-vs-computer rounds to compare the difficulty levels.

use crate::core::{Difficulty, EngineError, Player, Puzzle};
use crate::engine::{ComputerMove, Outcome, PuzzleEngine, Round, choose_move};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: u64,
    pub difficulty: Difficulty,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: u64, difficulty: Difficulty) -> Self {
        Self {
            rounds,
            seed,
            difficulty,
            show_progress: false,
        }
    }
}

/// Result of a single simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub turns: usize,
    pub winner: Player,
    pub winning_score: i32,
}

/// Aggregate statistics for one difficulty
#[derive(Debug)]
pub struct SimulationResult {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub average_winning_score: f64,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub duration: Duration,
}

/// Play one round with the computer in both seats
///
/// Both seats know the whole puzzle list and try to solve from it.
///
/// # Errors
///
/// Returns an engine error if the round state becomes inconsistent.
pub fn simulate_round<R: Rng + ?Sized>(
    engine: &PuzzleEngine,
    puzzle: &Puzzle,
    known_puzzles: &[Puzzle],
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<RoundSummary, EngineError> {
    let mut round = Round::new(engine, puzzle, (0, 0), Player::One);
    let mut turns = 0;

    while !round.is_over() {
        turns += 1;
        round = match choose_move(engine, &round, difficulty, known_puzzles, rng)? {
            ComputerMove::Guess(letter, guess_type) => {
                round.apply_guess(engine, letter, guess_type)?.round
            }
            ComputerMove::Solve(attempt) => round.solve(engine, &attempt)?.0,
        };
    }

    // computer seats never quit
    let Some(Outcome::Solved(winner)) = round.outcome() else {
        unreachable!("simulated round ended without a solver");
    };

    Ok(RoundSummary {
        turns,
        winner,
        winning_score: round.score_of(winner),
    })
}

/// Run a batch of simulated rounds in parallel
///
/// Round `i` draws its puzzle and every random guess from a generator seeded
/// with `seed + i`, so results do not depend on thread scheduling.
///
/// # Errors
///
/// Returns an error if the puzzle list is empty or a round fails.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    engine: &PuzzleEngine,
    puzzle_list: &[Puzzle],
    config: SimulationConfig,
) -> Result<SimulationResult> {
    if puzzle_list.is_empty() {
        bail!("cannot simulate without puzzles");
    }

    info!(
        "simulating {} {} rounds from seed {}",
        config.rounds, config.difficulty, config.seed
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(config.difficulty.to_string());

    let start = Instant::now();
    let summaries = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let puzzle = &puzzle_list[rng.random_range(0..puzzle_list.len())];
            let summary = simulate_round(engine, puzzle, puzzle_list, config.difficulty, &mut rng);
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(config.difficulty, &summaries, start.elapsed()))
}

fn summarize(difficulty: Difficulty, summaries: &[RoundSummary], duration: Duration) -> SimulationResult {
    let rounds = summaries.len();
    let divisor = rounds.max(1) as f64;

    let total_turns: usize = summaries.iter().map(|s| s.turns).sum();
    let total_score: i64 = summaries.iter().map(|s| i64::from(s.winning_score)).sum();
    let player_one_wins = summaries
        .iter()
        .filter(|s| s.winner == Player::One)
        .count();

    SimulationResult {
        difficulty,
        rounds,
        average_turns: total_turns as f64 / divisor,
        min_turns: summaries.iter().map(|s| s.turns).min().unwrap_or(0),
        max_turns: summaries.iter().map(|s| s.turns).max().unwrap_or(0),
        average_winning_score: total_score as f64 / divisor,
        player_one_wins,
        player_two_wins: rounds - player_one_wins,
        duration,
    }
}
