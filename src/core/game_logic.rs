//! Round rules: wager checks, the dealer's flip, and settlement.

use super::constants::WIN_MULTIPLIER;
use super::game_state::{Player, RoundOutcome};
use super::types::Face;
use crate::input::{parse_wager, InputError};
use rand::Rng;

/// Parses a wager and checks it against the current bank.
///
/// The wager must be strictly below the bank, so the whole bank can never be
/// staked. There is no lower bound: zero and negative wagers are accepted.
/// Amounts whose settlement would overflow the bank are rejected.
pub fn validate_wager(text: &str, bank: i64) -> Result<i64, InputError> {
    check_wager(parse_wager(text)?, bank)
}

/// Bounds check for an already-parsed wager. See [`validate_wager`].
pub fn check_wager(wager: i64, bank: i64) -> Result<i64, InputError> {
    if wager >= bank {
        return Err(InputError::InvalidWager);
    }

    let payout = wager.checked_mul(WIN_MULTIPLIER);
    let settles = bank
        .checked_sub(wager)
        .zip(payout)
        .and_then(|(debited, payout)| debited.checked_add(payout))
        .is_some();
    if !settles {
        return Err(InputError::InvalidWager);
    }

    Ok(wager)
}

/// Maps a raw draw to a face: even is Head, odd is Tail.
pub fn face_from_draw(draw: u32) -> Face {
    if draw % 2 == 0 {
        Face::Head
    } else {
        Face::Tail
    }
}

/// The dealer's flip.
pub fn flip_coin(rng: &mut impl Rng) -> Face {
    face_from_draw(rng.gen::<u32>())
}

/// Settles a round whose wager has already been debited from the bank.
///
/// A matching guess credits twice the wager; a miss leaves the bank alone.
pub fn settle_round(player: &mut Player, wager: i64, guess: Face, flip: Face) -> RoundOutcome {
    let won = guess == flip;
    if won {
        player.credit(wager * WIN_MULTIPLIER);
    }

    RoundOutcome {
        wager,
        guess,
        flip,
        won,
        bank_after: player.bank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn debited(bank: i64, wager: i64) -> Player {
        let mut player = Player::with_bank("Test".to_string(), bank);
        player.debit(wager);
        player
    }

    #[test]
    fn test_validate_wager_accepts_below_bank() {
        assert_eq!(validate_wager("100", 1000), Ok(100));
        assert_eq!(validate_wager("999", 1000), Ok(999));
        assert_eq!(validate_wager("0", 1000), Ok(0));
    }

    #[test]
    fn test_validate_wager_rejects_whole_bank_and_above() {
        assert_eq!(validate_wager("1000", 1000), Err(InputError::InvalidWager));
        assert_eq!(validate_wager("1001", 1000), Err(InputError::InvalidWager));
    }

    #[test]
    fn test_validate_wager_rejects_non_numeric() {
        assert_eq!(validate_wager("abc", 1000), Err(InputError::InvalidWager));
        assert_eq!(validate_wager("", 1000), Err(InputError::InvalidWager));
    }

    #[test]
    fn test_validate_wager_allows_negative() {
        assert_eq!(validate_wager("-50", 1000), Ok(-50));
    }

    #[test]
    fn test_validate_wager_with_empty_bank() {
        // Nothing is strictly below zero except negatives
        assert_eq!(validate_wager("0", 0), Err(InputError::InvalidWager));
        assert_eq!(validate_wager("-1", 0), Ok(-1));
    }

    #[test]
    fn test_validate_wager_rejects_overflowing_amounts() {
        let min = i64::MIN.to_string();
        assert_eq!(validate_wager(&min, 1000), Err(InputError::InvalidWager));
    }

    #[test]
    fn test_face_from_draw_parity() {
        assert_eq!(face_from_draw(0), Face::Head);
        assert_eq!(face_from_draw(1), Face::Tail);
        assert_eq!(face_from_draw(42), Face::Head);
        assert_eq!(face_from_draw(u32::MAX), Face::Tail);
    }

    #[test]
    fn test_flip_coin_follows_fixed_sequence() {
        // StepRng yields 0, 1, 2, ...
        let mut rng = StepRng::new(0, 1);
        let flips: Vec<Face> = (0..4).map(|_| flip_coin(&mut rng)).collect();
        assert_eq!(flips, vec![Face::Head, Face::Tail, Face::Head, Face::Tail]);
    }

    #[test]
    fn test_flip_coin_is_reproducible_with_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(flip_coin(&mut a), flip_coin(&mut b));
        }
    }

    #[test]
    fn test_flip_coin_is_roughly_fair() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let heads = (0..10_000)
            .filter(|_| flip_coin(&mut rng) == Face::Head)
            .count();
        assert!((4_500..=5_500).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_settle_win_adds_wager() {
        let mut player = debited(1000, 100);
        let outcome = settle_round(&mut player, 100, Face::Head, Face::Head);
        assert!(outcome.won);
        assert_eq!(player.bank, 1100);
        assert_eq!(outcome.bank_after, 1100);
    }

    #[test]
    fn test_settle_loss_keeps_debit() {
        let mut player = debited(1000, 200);
        let outcome = settle_round(&mut player, 200, Face::Tail, Face::Head);
        assert!(!outcome.won);
        assert_eq!(player.bank, 800);
        assert_eq!(outcome.guess, Face::Tail);
        assert_eq!(outcome.flip, Face::Head);
    }

    #[test]
    fn test_settle_negative_wager_boundary() {
        // A negative wager raises the bank on a loss and lowers it on a win
        let mut loser = debited(1000, -50);
        settle_round(&mut loser, -50, Face::Head, Face::Tail);
        assert_eq!(loser.bank, 1050);

        let mut winner = debited(1000, -50);
        settle_round(&mut winner, -50, Face::Head, Face::Head);
        assert_eq!(winner.bank, 950);
    }

    #[test]
    fn test_settlement_properties_hold_for_all_small_wagers() {
        let bank = 300;
        for wager in -100..bank {
            let mut win = debited(bank, wager);
            settle_round(&mut win, wager, Face::Tail, Face::Tail);
            assert_eq!(win.bank, bank + wager);

            let mut loss = debited(bank, wager);
            settle_round(&mut loss, wager, Face::Tail, Face::Head);
            assert_eq!(loss.bank, bank - wager);
        }
    }
}
