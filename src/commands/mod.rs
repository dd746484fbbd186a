//! Command implementations

pub mod check;
pub mod play;
pub mod simulate;

pub use check::{CheckEntry, CheckReport, check_file, check_fixtures};
pub use play::{PlayOptions, PlaySession};
pub use simulate::{RoundSummary, SimulationConfig, SimulationResult, run_simulation, simulate_round};
