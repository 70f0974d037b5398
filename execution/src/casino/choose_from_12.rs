//! Choose-from-12: the player marks any proper, non-empty subset of twelve fields.
//!
//! Selection: 12-bit mask, `0 < num < 2^12 - 1`.
//! Result: field index `0..12`, won when that bit of the mask is set.

use super::bits::num_set_bits;
use super::payout::{max_bet_from_probability, profit_from_total_won};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, CHOOSE_FROM_12_NUMS, PROBABILITY_DIVISOR};

/// Mask with every field selected (not a valid bet).
const ALL_FIELDS: u64 = (1 << CHOOSE_FROM_12_NUMS) - 1;

fn validate(num: u64) -> Result<(), GameError> {
    if num == 0 || num >= ALL_FIELDS {
        return Err(GameError::InvalidSelection(num));
    }
    Ok(())
}

fn total_won(num: u64, bet_value: u64) -> u128 {
    bet_value as u128 * CHOOSE_FROM_12_NUMS as u128 / num_set_bits(num) as u128
}

pub struct ChooseFrom12;

impl CasinoGame for ChooseFrom12 {
    fn game_type(&self) -> GameType {
        GameType::ChooseFrom12
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        validate(num)?;
        let win_probability = num_set_bits(num) as u64 * PROBABILITY_DIVISOR / CHOOSE_FROM_12_NUMS;
        max_bet_from_probability(win_probability, bankroll)
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        _num: u64,
    ) -> Result<u64, GameError> {
        Ok(FairRng::new(server_seed, user_seed).modulo(CHOOSE_FROM_12_NUMS))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        validate(num)?;
        if result >= CHOOSE_FROM_12_NUMS {
            return Err(GameError::InvalidResult(result));
        }
        if num & (1 << result) != 0 {
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
        Ok(num.trailing_zeros() as u64)
    }
}
