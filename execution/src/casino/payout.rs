//! Shared house-edge and bet-sizing arithmetic.
//!
//! All divisions truncate and every multiplication precedes its division.
//! Reordering any step changes real payouts.

use super::GameError;
use fairplay_types::casino::{HOUSE_EDGE, HOUSE_EDGE_DIVISOR, PROBABILITY_DIVISOR};

/// Largest bet a bankroll can cover for a bet won with `win_probability`
/// (scaled by [PROBABILITY_DIVISOR]) under the house edge.
pub fn max_bet_from_probability(win_probability: u64, bankroll: u64) -> Result<u128, GameError> {
    if win_probability == 0 {
        return Err(GameError::InvalidProbability(win_probability));
    }
    let probability = win_probability as i128;

    let tmp1 = PROBABILITY_DIVISOR as i128 * HOUSE_EDGE_DIVISOR as i128 / probability;
    let tmp2 = PROBABILITY_DIVISOR as i128 * HOUSE_EDGE as i128 / probability;
    let denominator = tmp1 - tmp2 - HOUSE_EDGE_DIVISOR as i128;
    if denominator <= 0 {
        return Err(GameError::InvalidProbability(win_probability));
    }

    let numerator = HOUSE_EDGE as i128 * bankroll as i128;
    Ok((numerator / denominator) as u128)
}

/// Gross payout less the house edge.
pub fn house_edge_adjust(total_won: u128) -> u128 {
    total_won - total_won * HOUSE_EDGE as u128 / HOUSE_EDGE_DIVISOR as u128
}

/// Profit of a won bet given its gross payout.
pub fn profit_from_total_won(total_won: u128, bet_value: u64) -> i128 {
    house_edge_adjust(total_won) as i128 - bet_value as i128
}

/// Profit of a table-driven payout: `bet_value * multiplier / divisor - bet_value`.
pub fn profit_from_multiplier(bet_value: u64, multiplier: u64, divisor: u64) -> i128 {
    let payout = bet_value as u128 * multiplier as u128 / divisor as u128;
    payout as i128 - bet_value as i128
}

/// Max bet from a static cap: `bankroll * entry / divisor`.
pub fn max_bet_from_table(bankroll: u64, entry: u64, divisor: u64) -> u128 {
    bankroll as u128 * entry as u128 / divisor as u128
}
