//! Keno: the player marks 1 to 10 of 40 fields and ten fields are drawn.
//!
//! Selection: 40-bit mask with between 1 and [KENO_SELECTABLE_FIELDS] bits set.
//! Result: 40-bit mask with exactly [KENO_SELECTABLE_FIELDS] bits set, drawn
//! without replacement from the seeds. The payout depends only on how many
//! fields were marked and how many of them were drawn (the hits).
//!
//! Max bets are a fixed fraction of the bankroll per number of marked fields
//! rather than a closed-form function of the win probability.

use super::bits::num_set_bits;
use super::payout::{max_bet_from_table, profit_from_multiplier};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, KENO_FIELDS, KENO_SELECTABLE_FIELDS};

/// Divisor for [KENO_MAX_BET] and [KENO_PAY_OUT].
pub const KENO_DIVIDER: u64 = 1000;

/// Max bet as a fraction of the bankroll, indexed by marked fields.
pub const KENO_MAX_BET: [u64; 11] = [0, 5, 10, 7, 5, 4, 4, 2, 2, 2, 1];

/// Payout multipliers indexed by `[marked][hits]`.
pub const KENO_PAY_OUT: [[u64; 11]; 11] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 3940, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2000, 3740, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1000, 3150, 9400, 0, 0, 0, 0, 0, 0, 0],
    [0, 800, 1700, 5300, 24500, 0, 0, 0, 0, 0, 0],
    [0, 250, 1400, 4000, 16600, 42000, 0, 0, 0, 0, 0],
    [0, 0, 1000, 3650, 7000, 16000, 46000, 0, 0, 0, 0],
    [0, 0, 460, 3000, 4400, 14000, 39000, 80000, 0, 0, 0],
    [0, 0, 0, 2250, 4000, 11000, 30000, 67000, 90000, 0, 0],
    [0, 0, 0, 1550, 3000, 8000, 14000, 37000, 65000, 100000, 0],
    [0, 0, 0, 1400, 2200, 4400, 8000, 28000, 60000, 120000, 200000],
];

const BOARD: u64 = (1u64 << KENO_FIELDS) - 1;

/// Number of marked fields in a valid selection.
fn selected_fields(num: u64) -> Result<usize, GameError> {
    let selected = num_set_bits(num);
    if num == 0 || num > BOARD || selected < 1 || selected > KENO_SELECTABLE_FIELDS {
        return Err(GameError::InvalidSelection(num));
    }
    Ok(selected as usize)
}

fn validate_result(result: u64) -> Result<(), GameError> {
    if result == 0 || result > BOARD || num_set_bits(result) != KENO_SELECTABLE_FIELDS {
        return Err(GameError::InvalidResult(result));
    }
    Ok(())
}

fn profit(bet_value: u64, selected: usize, hits: usize) -> i128 {
    profit_from_multiplier(bet_value, KENO_PAY_OUT[selected][hits], KENO_DIVIDER)
}

pub struct Keno;

impl CasinoGame for Keno {
    fn game_type(&self) -> GameType {
        GameType::Keno
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        let selected = selected_fields(num)?;
        Ok(max_bet_from_table(
            bankroll,
            KENO_MAX_BET[selected],
            KENO_DIVIDER,
        ))
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        _num: u64,
    ) -> Result<u64, GameError> {
        Ok(FairRng::new(server_seed, user_seed)
            .draw_without_replacement(KENO_FIELDS, KENO_SELECTABLE_FIELDS))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        let selected = selected_fields(num)?;
        validate_result(result)?;

        let hits = num_set_bits(num & result) as usize;
        Ok(profit(bet_value, selected, hits))
    }

    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError> {
        let selected = selected_fields(num)?;
        Ok(profit(bet_value, selected, selected))
    }

    fn best_result(&self, num: u64) -> Result<u64, GameError> {
        selected_fields(num)?;

        // Draw every marked field, then pad with the lowest unmarked ones
        let mut result = num;
        let mut position = 0;
        while num_set_bits(result) < KENO_SELECTABLE_FIELDS {
            result |= 1 << position;
            position += 1;
        }
        Ok(result)
    }
}
