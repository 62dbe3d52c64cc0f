//! Monte Carlo runner for the Monty Hall puzzle.
//!
//! Plays many independent trials with the same door count and switch policy
//! and aggregates them into a [`SimReport`]. Nothing here prints; the binary
//! renders the report.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run, run_simulation, run_with_draw};
