//! Betting strategy simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 1000 runs, flat $50
//!   cargo run --bin simulate -- --martingale 10    # double after each loss
//!   cargo run --bin simulate -- --seed 42 --json   # reproducible, save JSON

use cointoss::logging::init_logging;
use cointoss::simulator::{run_simulation, BetStrategy, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    init_logging();

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║                 COINTOSS STRATEGY SIMULATOR                   ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Rounds per run: {}", config.max_rounds_per_run);
        println!("  Starting bank:  ${}", config.starting_bank);
        println!("  Strategy:       {}", config.strategy);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = value {
                    config.num_runs = v.parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = value {
                    config.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-r" | "--rounds" => {
                if let Some(v) = value {
                    config.max_rounds_per_run = v.parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-b" | "--bank" => {
                if let Some(v) = value {
                    config.starting_bank = v.parse().unwrap_or(config.starting_bank);
                    i += 1;
                }
            }
            "--flat" => {
                if let Some(amount) = value.and_then(|v| v.parse().ok()) {
                    config.strategy = BetStrategy::Flat(amount);
                    i += 1;
                }
            }
            "--fraction" => {
                if let Some(fraction) = value.and_then(|v| v.parse().ok()) {
                    config.strategy = BetStrategy::Fraction(fraction);
                    i += 1;
                }
            }
            "--martingale" => {
                if let Some(base) = value.and_then(|v| v.parse().ok()) {
                    config.strategy = BetStrategy::Martingale(base);
                    i += 1;
                }
            }
            "--json" => {}
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Cointoss Strategy Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs N        Number of simulated sessions (default: 1000)");
    println!("  -s, --seed N        Random seed for reproducibility");
    println!("  -r, --rounds N      Rounds per session (default: 100)");
    println!("  -b, --bank N        Starting bank (default: 1000)");
    println!("  --flat N            Bet N every round (default: 50)");
    println!("  --fraction F        Bet a fraction F of the bank, e.g. 0.1");
    println!("  --martingale N      Start at N, double after every loss");
    println!("  --json              Save report as JSON");
    println!("  -v, --verbose       Print every run");
    println!("  -q, --quiet         Only print the report");
    println!("  -h, --help          Show this help");
}
