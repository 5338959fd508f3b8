//! Core game state and logic.

pub mod constants;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;
pub mod types;

pub use constants::*;
pub use game_logic::*;
pub use game_loop::*;
pub use game_state::*;
pub use types::*;
