// Bank
pub const STARTING_BANK: i64 = 1000;

// A winning guess pays back this multiple of the wager
pub const WIN_MULTIPLIER: i64 = 2;

// Prompts
pub const NAME_PROMPT: &str = "What is your name? ";
pub const GUESS_PROMPT: &str = "Do you want to bet on (H)eads or (T)ails? ";
pub const COMMAND_PROMPT: &str = "Wanna try your luck (A)gain? Or have you had (E)nough? ";

// Round results
pub const WIN_MSG: &str = "Congratulations! You won!";
pub const LOSS_MSG: &str = "Sorry. You lost.";

pub fn wager_prompt(name: &str, bank: i64) -> String {
    format!(
        "{}, you have ${} available. How much would you like to wager? ",
        name, bank
    )
}

pub fn bank_report(bank: i64) -> String {
    format!("You have ${}.", bank)
}

pub fn farewell(bank: i64) -> String {
    format!("Thanks for playing. You ended with ${}.", bank)
}
