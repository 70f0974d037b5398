//! Coin flip. Selection and result are both `0` or `1`; won when they match.

use super::payout::{max_bet_from_probability, profit_from_total_won};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, PROBABILITY_DIVISOR};

const SIDES: u64 = 2;

fn validate(num: u64) -> Result<(), GameError> {
    if num >= SIDES {
        return Err(GameError::InvalidSelection(num));
    }
    Ok(())
}

fn total_won(bet_value: u64) -> u128 {
    bet_value as u128 * SIDES as u128
}

pub struct FlipACoin;

impl CasinoGame for FlipACoin {
    fn game_type(&self) -> GameType {
        GameType::FlipACoin
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        validate(num)?;
        max_bet_from_probability(PROBABILITY_DIVISOR / SIDES, bankroll)
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        _num: u64,
    ) -> Result<u64, GameError> {
        Ok(FairRng::new(server_seed, user_seed).modulo(SIDES))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        validate(num)?;
        if result >= SIDES {
            return Err(GameError::InvalidResult(result));
        }
        if result == num {
            Ok(profit_from_total_won(total_won(bet_value), bet_value))
        } else {
            Ok(-(bet_value as i128))
        }
    }

    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError> {
        validate(num)?;
        Ok(profit_from_total_won(total_won(bet_value), bet_value))
    }

    fn best_result(&self, num: u64) -> Result<u64, GameError> {
        validate(num)?;
        Ok(num)
    }
}
