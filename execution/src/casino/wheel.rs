//! Wheel of 10 or 20 segments at three risk levels.
//!
//! Selection: `risk * 100 + segments` with `risk` in 1..=3 and `segments` 10 or 20.
//! Result: `0..WHEEL_RESULT_RANGE`, landing on segment `result * segments / WHEEL_RESULT_RANGE`.

use super::payout::{max_bet_from_table, profit_from_multiplier};
use super::risk::{split_selection, Risk};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::{GameType, WHEEL_RESULT_RANGE};

/// Supported segment counts, in table column order.
pub const WHEEL_SEGMENTS: [u64; 2] = [10, 20];

/// Divisor for [WHEEL_MAX_BET].
pub const WHEEL_MAX_BET_DIVIDER: u64 = 10_000;

/// Divisor for [WHEEL_PAY_OUT].
pub const WHEEL_PAY_OUT_DIVIDER: u64 = 100;

/// Max bet as a fraction of the bankroll, indexed by `[risk][segments]`.
pub const WHEEL_MAX_BET: [[u64; 2]; 3] = [[632, 386], [134, 134], [17, 8]];

/// Multiplier of every segment, indexed by `[risk][segments]`.
pub const WHEEL_PAY_OUT: [[&[u64]; 2]; 3] = [
    [
        &[0, 120, 120, 0, 120, 120, 145, 120, 120, 120],
        &[
            0, 120, 120, 0, 120, 120, 145, 120, 0, 120, 240, 120, 0, 120, 120, 145, 120, 0, 120,
            120,
        ],
    ],
    [
        &[0, 165, 0, 160, 0, 300, 0, 160, 0, 200],
        &[
            0, 165, 0, 160, 0, 300, 0, 160, 0, 200, 0, 165, 0, 160, 0, 300, 0, 160, 0, 200,
        ],
    ],
    [
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 985],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1970,
        ],
    ],
];

/// Decoded wheel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layout {
    risk: Risk,
    column: usize,
    segments: u64,
}

impl Layout {
    fn decode(num: u64) -> Result<Self, GameError> {
        let (digit, segments) = split_selection(num);
        let risk = Risk::from_digit(digit).ok_or(GameError::InvalidSelection(num))?;
        let column = WHEEL_SEGMENTS
            .iter()
            .position(|&s| s == segments)
            .ok_or(GameError::InvalidSelection(num))?;
        Ok(Self {
            risk,
            column,
            segments,
        })
    }

    fn payouts(&self) -> &'static [u64] {
        WHEEL_PAY_OUT[self.risk.index()][self.column]
    }

    fn segment(&self, result: u64) -> usize {
        (result * self.segments / WHEEL_RESULT_RANGE) as usize
    }

    /// First segment carrying the highest multiplier.
    fn best_segment(&self) -> (usize, u64) {
        let payouts = self.payouts();
        let best = payouts.iter().copied().max().unwrap_or(0);
        let index = payouts.iter().position(|&p| p == best).unwrap_or(0);
        (index, best)
    }
}

fn validate_result(result: u64) -> Result<(), GameError> {
    if result >= WHEEL_RESULT_RANGE {
        return Err(GameError::InvalidResult(result));
    }
    Ok(())
}

pub struct Wheel;

impl CasinoGame for Wheel {
    fn game_type(&self) -> GameType {
        GameType::Wheel
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        let layout = Layout::decode(num)?;
        Ok(max_bet_from_table(
            bankroll,
            WHEEL_MAX_BET[layout.risk.index()][layout.column],
            WHEEL_MAX_BET_DIVIDER,
        ))
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        _num: u64,
    ) -> Result<u64, GameError> {
        Ok(FairRng::new(server_seed, user_seed).modulo(WHEEL_RESULT_RANGE))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        let layout = Layout::decode(num)?;
        validate_result(result)?;

        let multiplier = layout.payouts()[layout.segment(result)];
        Ok(profit_from_multiplier(
            bet_value,
            multiplier,
            WHEEL_PAY_OUT_DIVIDER,
        ))
    }

    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError> {
        let (_, best) = Layout::decode(num)?.best_segment();
        Ok(profit_from_multiplier(bet_value, best, WHEEL_PAY_OUT_DIVIDER))
    }

    fn best_result(&self, num: u64) -> Result<u64, GameError> {
        let layout = Layout::decode(num)?;
        let (index, _) = layout.best_segment();
        Ok(index as u64 * WHEEL_RESULT_RANGE / layout.segments)
    }
}
