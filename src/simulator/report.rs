//! Per-run statistics and the aggregated simulation report.

use super::config::SimConfig;
use crate::core::game_state::RoundOutcome;
use serde::Serialize;

/// What happened in one simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub final_bank: i64,
    pub peak_bank: i64,
    /// The strategy's next wager could not be placed
    pub busted: bool,
}

impl RunStats {
    pub fn new(starting_bank: i64) -> Self {
        Self {
            rounds_played: 0,
            wins: 0,
            losses: 0,
            final_bank: starting_bank,
            peak_bank: starting_bank,
            busted: false,
        }
    }

    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds_played += 1;
        if outcome.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.final_bank = outcome.bank_after;
        self.peak_bank = self.peak_bank.max(outcome.bank_after);
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub strategy: String,
    pub starting_bank: i64,
    pub num_runs: u32,
    pub runs_busted: u32,
    pub runs_in_profit: u32,

    pub avg_final_bank: f64,
    pub avg_peak_bank: f64,
    pub avg_rounds_played: f64,
    pub win_rate: f64,
    pub min_final_bank: i64,
    pub max_final_bank: i64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let runs_busted = runs.iter().filter(|r| r.busted).count() as u32;
        let runs_in_profit = runs
            .iter()
            .filter(|r| r.final_bank > config.starting_bank)
            .count() as u32;

        let avg_final_bank = runs.iter().map(|r| r.final_bank as f64).sum::<f64>() / divisor;
        let avg_peak_bank = runs.iter().map(|r| r.peak_bank as f64).sum::<f64>() / divisor;
        let avg_rounds_played =
            runs.iter().map(|r| r.rounds_played as f64).sum::<f64>() / divisor;

        let total_rounds: u64 = runs.iter().map(|r| r.rounds_played as u64).sum();
        let total_wins: u64 = runs.iter().map(|r| r.wins as u64).sum();
        let win_rate = total_wins as f64 / total_rounds.max(1) as f64;

        let min_final_bank = runs
            .iter()
            .map(|r| r.final_bank)
            .min()
            .unwrap_or(config.starting_bank);
        let max_final_bank = runs
            .iter()
            .map(|r| r.final_bank)
            .max()
            .unwrap_or(config.starting_bank);

        Self {
            strategy: config.strategy.to_string(),
            starting_bank: config.starting_bank,
            num_runs,
            runs_busted,
            runs_in_profit,
            avg_final_bank,
            avg_peak_bank,
            avg_rounds_played,
            win_rate,
            min_final_bank,
            max_final_bank,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Strategy:        {}\n", self.strategy));
        report.push_str(&format!("Starting bank:   ${}\n\n", self.starting_bank));

        report.push_str(&format!(
            "Runs: {} total, {} busted, {} ended in profit\n\n",
            self.num_runs, self.runs_busted, self.runs_in_profit
        ));

        report.push_str("─── Bank ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg final:     ${:.2}\n", self.avg_final_bank));
        report.push_str(&format!("  Avg peak:      ${:.2}\n", self.avg_peak_bank));
        report.push_str(&format!(
            "  Range:         ${} .. ${}\n\n",
            self.min_final_bank, self.max_final_bank
        ));

        report.push_str("─── Rounds ────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg played:    {:.1}\n", self.avg_rounds_played));
        report.push_str(&format!("  Win rate:      {:.1}%\n", self.win_rate * 100.0));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
