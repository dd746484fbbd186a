//! Phrase Puzzler - CLI
//!
//! Play the game in the terminal, check view fixtures or simulate computer rounds.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use phrase_puzzler::{
    commands::{PlayOptions, PlaySession, SimulationConfig, check_file, run_simulation},
    core::{Difficulty, GameType, Puzzle, PuzzleConfig},
    engine::PuzzleEngine,
    output::{print_check_report, print_simulation_results},
    puzzles::{
        PUZZLES,
        loader::{load_from_file, puzzles_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "phrase_puzzler",
    about = "Two-player phrase guessing game with a computer opponent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle list: 'all' (default, embedded list) or path to file
    #[arg(short, long, global = true, default_value = "all")]
    puzzles: String,

    /// Character shown for hidden letters
    #[arg(long, global = true, default_value_t = '^')]
    hidden: char,

    /// Points a vowel costs
    #[arg(long, global = true, default_value_t = 1)]
    vowel_price: i32,

    /// Points per hidden consonant occurrence when solving
    #[arg(long, global = true, default_value_t = 2)]
    consonant_bonus: i32,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Game type: solo, human-human or human-computer (also 1, 2, 3)
        #[arg(short, long, default_value = "human-computer")]
        mode: GameType,

        /// Computer difficulty: easy or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Let an easy computer play hard once half the letters show
        #[arg(long)]
        escalate: bool,

        /// Seed for puzzle choice and computer moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check `puzzle|view` lines in a fixture file
    Check {
        /// Fixture file path
        file: String,
    },

    /// Play computer-vs-computer rounds and compare difficulties
    Simulate {
        /// Number of rounds per difficulty
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Base seed; round i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Only simulate one difficulty (default: both)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

/// Load puzzles based on the --puzzles flag
///
/// - "all": the embedded list
/// - "<path>": one puzzle per line from a file
fn load_puzzles(mode: &str, config: &PuzzleConfig) -> Result<Vec<Puzzle>> {
    let puzzles = match mode {
        "all" => puzzles_from_slice(PUZZLES, config),
        path => load_from_file(path, config)
            .with_context(|| format!("failed to load puzzles from {path}"))?,
    };

    if puzzles.is_empty() {
        bail!("puzzle list '{mode}' has no usable puzzles");
    }
    Ok(puzzles)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PuzzleConfig::default()
        .with_hidden(cli.hidden)
        .with_vowel_price(cli.vowel_price)
        .with_consonant_bonus(cli.consonant_bonus);
    let engine = PuzzleEngine::try_new(config).context("invalid --hidden placeholder")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: GameType::HumanComputer,
        difficulty: Difficulty::Easy,
        escalate: false,
        seed: None,
    });

    match command {
        Commands::Play {
            mode,
            difficulty,
            escalate,
            seed,
        } => {
            let puzzles = load_puzzles(&cli.puzzles, engine.config())?;
            let options = PlayOptions {
                game_type: mode,
                difficulty,
                escalate,
            };
            run_play_command(&engine, &puzzles, options, seed)
        }
        Commands::Check { file } => run_check_command(&engine, &file),
        Commands::Simulate {
            rounds,
            seed,
            difficulty,
        } => {
            let puzzles = load_puzzles(&cli.puzzles, engine.config())?;
            run_simulate_command(&engine, &puzzles, rounds, seed, difficulty)
        }
    }
}

fn run_play_command(
    engine: &PuzzleEngine,
    puzzles: &[Puzzle],
    options: PlayOptions,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let stdin = io::stdin();
    let mut session = PlaySession::new(
        engine,
        puzzles,
        options,
        stdin.lock(),
        io::stdout(),
        &mut rng,
    );
    session.run()?;
    Ok(())
}

fn run_check_command(engine: &PuzzleEngine, file: &str) -> Result<()> {
    let report = check_file(engine, file)?;
    print_check_report(&report);

    if !report.all_passed() {
        bail!("fixture check failed");
    }
    Ok(())
}

fn run_simulate_command(
    engine: &PuzzleEngine,
    puzzles: &[Puzzle],
    rounds: usize,
    seed: u64,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    let levels = difficulty.map_or_else(|| vec![Difficulty::Easy, Difficulty::Hard], |d| vec![d]);

    println!(
        "Simulating {rounds} rounds per difficulty over {} puzzles...",
        puzzles.len()
    );

    let results = levels
        .into_iter()
        .map(|level| {
            let mut config = SimulationConfig::new(rounds, seed, level);
            config.show_progress = true;
            run_simulation(engine, puzzles, config)
        })
        .collect::<Result<Vec<_>>>()?;

    print_simulation_results(&results);
    Ok(())
}
