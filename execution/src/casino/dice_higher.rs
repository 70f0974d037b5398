//! Dice game betting the roll lands above the chosen number.
//!
//! Selection: `0 <= num <= RANGE - 2`.
//! Result: `0..RANGE`, won when `result > num`.

use super::payout::{max_bet_from_probability, profit_from_total_won};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, PROBABILITY_DIVISOR, RANGE};

fn validate(num: u64) -> Result<(), GameError> {
    if num >= RANGE - 1 {
        return Err(GameError::InvalidSelection(num));
    }
    Ok(())
}

/// Number of winning results for `num`.
fn winning_results(num: u64) -> u64 {
    RANGE - num - 1
}

fn total_won(num: u64, bet_value: u64) -> u128 {
    bet_value as u128 * RANGE as u128 / winning_results(num) as u128
}

pub struct DiceHigher;

impl CasinoGame for DiceHigher {
    fn game_type(&self) -> GameType {
        GameType::DiceHigher
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        validate(num)?;
        let win_probability = winning_results(num) * PROBABILITY_DIVISOR / RANGE;
        max_bet_from_probability(win_probability, bankroll)
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        _num: u64,
    ) -> Result<u64, GameError> {
        Ok(FairRng::new(server_seed, user_seed).modulo(RANGE))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        validate(num)?;
        if result >= RANGE {
            return Err(GameError::InvalidResult(result));
        }
        if result > num {
            Ok(profit_from_total_won(total_won(num, bet_value), bet_value))
        } else {
            Ok(-(bet_value as i128))
        }
    }

    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError> {
        validate(num)?;
        Ok(profit_from_total_won(total_won(num, bet_value), bet_value))
    }

    fn best_result(&self, num: u64) -> Result<u64, GameError> {
        validate(num)?;
        Ok(RANGE - 1)
    }
}
