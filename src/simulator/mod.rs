//! Monte Carlo simulator for betting strategies.
//!
//! Plays thousands of automated sessions with the same wager rules, flip and
//! settlement as the interactive game, to see how a strategy fares against a
//! fair coin.

mod config;
mod report;
mod runner;

pub use config::{BetStrategy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
