use cointoss::build_info;
use cointoss::core::game_loop::play_session;
use cointoss::logging::init_logging;
use cointoss::Console;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

const HELP: &str = "\
Cointoss - bet on a coin flip

Usage: cointoss [options]

Options:
  -s, --seed N   Seed the dealer's coin for a reproducible game
  -v, --version  Show version information
  -h, --help     Show this help message

Set RUST_LOG (e.g. RUST_LOG=cointoss=debug) for diagnostics on stderr.";

struct Args {
    seed: Option<u64>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args);

    init_logging();

    // One generator for the whole session
    let mut rng = match args.seed {
        Some(seed) => {
            info!(seed, "seeded dealer");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut console = Console::stdio();
    if let Err(e) = play_session(&mut console, &mut rng) {
        eprintln!("cointoss: {}", e);
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args { seed: None };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => match args.get(i + 1).and_then(|s| s.parse().ok()) {
                Some(seed) => {
                    parsed.seed = Some(seed);
                    i += 1;
                }
                None => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", HELP);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'cointoss --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}
