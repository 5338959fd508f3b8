//! Cointoss - console coin-toss betting game.
//!
//! The game rules, console session and strategy simulator are exposed here
//! so the binaries and integration tests share them.

pub mod build_info;
pub mod console;
pub mod core;
pub mod input;
pub mod logging;
pub mod simulator;

pub use crate::core::constants::STARTING_BANK;
pub use crate::core::game_state::{Player, RoundOutcome, SessionSummary};
pub use crate::core::types::{Command, Face};
pub use console::Console;
pub use input::InputError;
