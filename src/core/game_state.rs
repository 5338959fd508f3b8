//! Player state and per-round records.

use super::constants::STARTING_BANK;
use super::types::Face;

/// The one player at the table.
///
/// The bank has no floor: winning with a negative wager can push it below
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub bank: i64,
}

impl Player {
    /// Creates a player holding the starting bank.
    pub fn new(name: String) -> Self {
        Self::with_bank(name, STARTING_BANK)
    }

    pub fn with_bank(name: String, bank: i64) -> Self {
        Self { name, bank }
    }

    /// Takes the wager off the bank before the coin is flipped.
    pub fn debit(&mut self, amount: i64) {
        self.bank -= amount;
    }

    pub fn credit(&mut self, amount: i64) {
        self.bank += amount;
    }
}

/// Everything that happened in one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub wager: i64,
    pub guess: Face,
    pub flip: Face,
    pub won: bool,
    pub bank_after: i64,
}

/// Totals for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub player_name: String,
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub starting_bank: i64,
    pub final_bank: i64,
}

impl SessionSummary {
    pub fn new(player: &Player) -> Self {
        Self {
            player_name: player.name.clone(),
            starting_bank: player.bank,
            final_bank: player.bank,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds_played += 1;
        if outcome.won {
            self.rounds_won += 1;
        } else {
            self.rounds_lost += 1;
        }
        self.final_bank = outcome.bank_after;
    }

    pub fn net(&self) -> i64 {
        self.final_bank - self.starting_bank
    }
}
