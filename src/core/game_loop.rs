//! The interactive session.
//!
//! A round walks through: collect wager, collect guess, flip, resolve, ask
//! whether to continue. Invalid answers are reported and asked again with
//! no retry limit. The session ends only when the player answers `E`.

use super::constants::{
    bank_report, farewell, wager_prompt, COMMAND_PROMPT, GUESS_PROMPT, LOSS_MSG, NAME_PROMPT,
    WIN_MSG,
};
use super::game_logic::{flip_coin, settle_round, validate_wager};
use super::game_state::{Player, RoundOutcome, SessionSummary};
use super::types::{Command, Face};
use crate::console::Console;
use crate::input::{parse_command, parse_guess, InputError};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Runs a whole game: asks for a name, then plays rounds until the player
/// has had enough.
pub fn play_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut impl Rng,
) -> io::Result<SessionSummary> {
    let name = console.prompt(NAME_PROMPT)?;
    let player = Player::new(name);
    info!(player = %player.name, bank = player.bank, "session started");

    run_rounds(console, player, rng)
}

/// Plays rounds with an existing player until `Enough`, then says goodbye.
pub fn run_rounds<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut player: Player,
    rng: &mut impl Rng,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::new(&player);

    loop {
        let outcome = play_round(console, &mut player, rng)?;
        summary.record(&outcome);

        console.say(&bank_report(player.bank))?;
        match ask_command(console)? {
            Command::PlayAgain => continue,
            Command::Enough => break,
        }
    }

    console.say(&farewell(player.bank))?;
    info!(
        player = %summary.player_name,
        rounds = summary.rounds_played,
        won = summary.rounds_won,
        final_bank = summary.final_bank,
        "session finished"
    );
    Ok(summary)
}

/// One round up to and including the win/loss message.
///
/// The wager leaves the bank as soon as it is accepted.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    rng: &mut impl Rng,
) -> io::Result<RoundOutcome> {
    let wager = ask_wager(console, player)?;
    player.debit(wager);

    let guess = ask_guess(console)?;
    let flip = flip_coin(rng);

    console.say(&format!(
        "You guessed {} and the dealer flipped {}",
        guess, flip
    ))?;

    let outcome = settle_round(player, wager, guess, flip);
    console.say(if outcome.won { WIN_MSG } else { LOSS_MSG })?;

    debug!(
        wager = outcome.wager,
        guess = %outcome.guess,
        flip = %outcome.flip,
        won = outcome.won,
        bank = outcome.bank_after,
        "round settled"
    );
    Ok(outcome)
}

pub fn ask_wager<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
) -> io::Result<i64> {
    let prompt = wager_prompt(&player.name, player.bank);
    ask_until_valid(console, &prompt, |text| validate_wager(text, player.bank))
}

pub fn ask_guess<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Face> {
    ask_until_valid(console, GUESS_PROMPT, parse_guess)
}

pub fn ask_command<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Command> {
    ask_until_valid(console, COMMAND_PROMPT, parse_command)
}

fn ask_until_valid<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let answer = console.prompt(prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(answer = %answer, "rejected input: {}", err);
                console.say(&err.to_string())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_ask_wager_retries_until_valid() {
        let mut c = console("abc\n1000\n50\n");
        let player = Player::new("Alice".to_string());
        assert_eq!(ask_wager(&mut c, &player).unwrap(), 50);

        let out = output(c);
        assert_eq!(out.matches("The wager you entered is invalid!").count(), 2);
        assert_eq!(
            out.matches("Alice, you have $1000 available.").count(),
            3
        );
    }

    #[test]
    fn test_ask_guess_retries_until_valid() {
        let mut c = console("h\nheads\nT\n");
        assert_eq!(ask_guess(&mut c).unwrap(), Face::Tail);
        assert_eq!(
            output(c).matches("You must guess (H)eads or (T)ails!!!").count(),
            2
        );
    }

    #[test]
    fn test_ask_command_retries_until_valid() {
        let mut c = console("x\nA\n");
        assert_eq!(ask_command(&mut c).unwrap(), Command::PlayAgain);
        assert_eq!(output(c).matches("Please make a valid choice!").count(), 1);
    }

    #[test]
    fn test_play_round_debits_before_flip_and_settles() {
        let mut c = console("100\nH\n");
        let mut player = Player::new("Alice".to_string());
        // Even draw: Head
        let mut rng = StepRng::new(2, 0);

        let outcome = play_round(&mut c, &mut player, &mut rng).unwrap();
        assert!(outcome.won);
        assert_eq!(player.bank, 1100);

        let out = output(c);
        assert!(out.contains("You guessed Head and the dealer flipped Head\n"));
        assert!(out.contains("Congratulations! You won!\n"));
    }

    #[test]
    fn test_end_of_input_mid_round_is_an_error() {
        let mut c = console("100\n");
        let mut player = Player::new("Alice".to_string());
        let mut rng = StepRng::new(0, 1);

        let err = play_round(&mut c, &mut player, &mut rng).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        // The wager was already taken
        assert_eq!(player.bank, 900);
    }
}
