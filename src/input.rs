//! Parsing of the player's typed answers.
//!
//! Every token is matched exactly: no trimming, no case folding. The console
//! strips the line terminator before anything reaches these functions.

use crate::core::types::{Command, Face};
use thiserror::Error;

/// A rejected answer. The message is what the player sees before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The wager you entered is invalid!")]
    InvalidWager,
    #[error("You must guess (H)eads or (T)ails!!!")]
    InvalidGuess,
    #[error("Please make a valid choice!")]
    InvalidCommand,
}

/// Parses an integer amount. Bounds against the bank are checked by
/// [`crate::core::game_logic::validate_wager`].
pub fn parse_wager(text: &str) -> Result<i64, InputError> {
    text.parse::<i64>().map_err(|_| InputError::InvalidWager)
}

pub fn parse_guess(text: &str) -> Result<Face, InputError> {
    match text {
        "H" => Ok(Face::Head),
        "T" => Ok(Face::Tail),
        _ => Err(InputError::InvalidGuess),
    }
}

pub fn parse_command(text: &str) -> Result<Command, InputError> {
    match text {
        "A" => Ok(Command::PlayAgain),
        "E" => Ok(Command::Enough),
        _ => Err(InputError::InvalidCommand),
    }
}

/// Removes a trailing `\n` or `\r\n`, nothing else.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
