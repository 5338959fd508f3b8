//! Runs automated sessions through the same rules the interactive game uses.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::game_logic::{check_wager, flip_coin, settle_round};
use crate::core::game_state::{Player, RoundOutcome};
use crate::core::types::Face;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run every configured session and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} rounds, {} won, {} lost, final ${}{}",
                run_idx + 1,
                config.num_runs,
                run.rounds_played,
                run.wins,
                run.losses,
                run.final_bank,
                if run.busted { " (busted)" } else { "" }
            );
        }

        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config)
}

/// Plays one session until the round limit or until the strategy's wager
/// can no longer be placed.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut player = Player::with_bank("Simulator".to_string(), config.starting_bank);
    let mut stats = RunStats::new(config.starting_bank);
    let mut previous: Option<RoundOutcome> = None;

    for _ in 0..config.max_rounds_per_run {
        let proposed = config.strategy.next_wager(player.bank, previous.as_ref());
        let wager = match check_wager(proposed, player.bank) {
            Ok(wager) => wager,
            Err(_) => {
                debug!(bank = player.bank, wager = proposed, "simulated player busted");
                stats.busted = true;
                break;
            }
        };

        player.debit(wager);
        let guess = if rng.gen::<bool>() {
            Face::Head
        } else {
            Face::Tail
        };
        let flip = flip_coin(rng);
        let outcome = settle_round(&mut player, wager, guess, flip);

        stats.record(&outcome);
        previous = Some(outcome);
    }

    stats
}
