//! Dice game betting the roll lands below the chosen number.
//!
//! Selection: `0 < num < RANGE`.
//! Result: `0..RANGE`, won when `result < num`.

use super::payout::{max_bet_from_probability, profit_from_total_won};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, PROBABILITY_DIVISOR, RANGE};

fn validate(num: u64) -> Result<(), GameError> {
    if num == 0 || num >= RANGE {
        return Err(GameError::InvalidSelection(num));
    }
    Ok(())
}

fn validate_result(result: u64) -> Result<(), GameError> {
    if result >= RANGE {
        return Err(GameError::InvalidResult(result));
    }
    Ok(())
}

/// Gross payout of a win: `bet_value * RANGE / num`.
fn total_won(num: u64, bet_value: u64) -> u128 {
    bet_value as u128 * RANGE as u128 / num as u128
}

pub struct DiceLower;

impl CasinoGame for DiceLower {
    fn game_type(&self) -> GameType {
        GameType::DiceLower
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        validate(num)?;
        let win_probability = num * PROBABILITY_DIVISOR / RANGE;
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
        validate_result(result)?;
        if result < num {
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
        Ok(0)
    }
}
