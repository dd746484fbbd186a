//! Terminal output formatting
//!
//! Display utilities for rounds, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_simulation_results, write_guess_report, write_round_result,
    write_round_status,
};
