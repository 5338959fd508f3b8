//! Simulation configuration.

use crate::core::constants::STARTING_BANK;
use crate::core::game_state::RoundOutcome;
use std::fmt;

/// How an automated player sizes each wager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetStrategy {
    /// Same amount every round
    Flat(i64),
    /// Fraction of the current bank, rounded down
    Fraction(f64),
    /// Start at the base amount, double after every loss, reset after a win
    Martingale(i64),
}

impl BetStrategy {
    /// Wager for the next round given the current bank and the previous round.
    pub fn next_wager(&self, bank: i64, previous: Option<&RoundOutcome>) -> i64 {
        match *self {
            BetStrategy::Flat(amount) => amount,
            BetStrategy::Fraction(fraction) => (bank as f64 * fraction).floor() as i64,
            BetStrategy::Martingale(base) => match previous {
                Some(outcome) if !outcome.won => outcome.wager.saturating_mul(2),
                _ => base,
            },
        }
    }
}

impl fmt::Display for BetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetStrategy::Flat(amount) => write!(f, "flat ${}", amount),
            BetStrategy::Fraction(fraction) => write!(f, "{:.1}% of bank", fraction * 100.0),
            BetStrategy::Martingale(base) => write!(f, "martingale from ${}", base),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Rounds per session before the simulated player walks away
    pub max_rounds_per_run: u32,

    pub starting_bank: i64,

    pub strategy: BetStrategy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_rounds_per_run: 100,
            starting_bank: STARTING_BANK,
            strategy: BetStrategy::Flat(50),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short reproducible config for checking a strategy
    pub fn quick(strategy: BetStrategy, seed: u64) -> Self {
        Self {
            num_runs: 200,
            seed: Some(seed),
            strategy,
            verbosity: 0,
            ..Default::default()
        }
    }
}
