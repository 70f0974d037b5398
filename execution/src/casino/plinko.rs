//! Plinko board of 8, 12 or 16 peg rows at three risk levels.
//!
//! Selection: `risk * 100 + rows` with `risk` in 1..=3 and `rows` 8, 12 or 16.
//! Result: the low `rows` bits of the draw, one bit per left or right bounce.
//! The ball lands `|set_bits - rows / 2|` buckets away from the centre, and
//! outer buckets pay more.

use super::bits::num_set_bits;
use super::payout::{max_bet_from_table, profit_from_multiplier};
use super::risk::{split_selection, Risk};
use super::{CasinoGame, FairRng, GameError};
use fairplay_types::casino::GameType;

/// Supported row counts, in table column order.
pub const PLINKO_ROWS: [u64; 3] = [8, 12, 16];

/// Divisor for [PLINKO_MAX_BET].
pub const PLINKO_MAX_BET_DIVIDER: u64 = 10_000;

/// Divisor for [PLINKO_PAY_OUT].
pub const PLINKO_PAY_OUT_DIVIDER: u64 = 10;

/// Max bet as a fraction of the bankroll, indexed by `[risk][rows]`.
pub const PLINKO_MAX_BET: [[u64; 3]; 3] = [[264, 607, 758], [55, 175, 208], [24, 77, 68]];

/// Multiplier by distance from the centre bucket, indexed by `[risk][rows]`.
pub const PLINKO_PAY_OUT: [[&[u64]; 3]; 3] = [
    [
        &[4, 9, 14, 19, 73],
        &[4, 10, 11, 15, 18, 31, 100],
        &[4, 10, 11, 12, 16, 17, 18, 75, 130],
    ],
    [
        &[3, 5, 15, 37, 160],
        &[3, 6, 14, 20, 30, 42, 220],
        &[2, 5, 14, 17, 19, 40, 63, 96, 250],
    ],
    [
        &[1, 3, 10, 71, 210],
        &[1, 4, 11, 31, 46, 81, 270],
        &[1, 3, 11, 20, 32, 56, 100, 260, 800],
    ],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Board {
    risk: Risk,
    column: usize,
    rows: u64,
}

impl Board {
    fn decode(num: u64) -> Result<Self, GameError> {
        let (digit, rows) = split_selection(num);
        let risk = Risk::from_digit(digit).ok_or(GameError::InvalidSelection(num))?;
        let column = PLINKO_ROWS
            .iter()
            .position(|&r| r == rows)
            .ok_or(GameError::InvalidSelection(num))?;
        Ok(Self { risk, column, rows })
    }

    fn payouts(&self) -> &'static [u64] {
        PLINKO_PAY_OUT[self.risk.index()][self.column]
    }

    fn validate_result(&self, result: u64) -> Result<(), GameError> {
        if result >> self.rows != 0 {
            return Err(GameError::InvalidResult(result));
        }
        Ok(())
    }

    /// Distance of the landing bucket from the centre.
    fn bucket(&self, result: u64) -> usize {
        let half = self.rows / 2;
        let set = num_set_bits(result) as u64;
        set.abs_diff(half) as usize
    }

    fn best_bucket(&self) -> (usize, u64) {
        let payouts = self.payouts();
        let best = payouts.iter().copied().max().unwrap_or(0);
        let index = payouts.iter().position(|&p| p == best).unwrap_or(0);
        (index, best)
    }
}

pub struct Plinko;

impl CasinoGame for Plinko {
    fn game_type(&self) -> GameType {
        GameType::Plinko
    }

    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError> {
        let board = Board::decode(num)?;
        Ok(max_bet_from_table(
            bankroll,
            PLINKO_MAX_BET[board.risk.index()][board.column],
            PLINKO_MAX_BET_DIVIDER,
        ))
    }

    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        num: u64,
    ) -> Result<u64, GameError> {
        let board = Board::decode(num)?;
        Ok(FairRng::new(server_seed, user_seed).low_bits(board.rows as u32))
    }

    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError> {
        let board = Board::decode(num)?;
        board.validate_result(result)?;

        let multiplier = board.payouts()[board.bucket(result)];
        Ok(profit_from_multiplier(
            bet_value,
            multiplier,
            PLINKO_PAY_OUT_DIVIDER,
        ))
    }

    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError> {
        let (_, best) = Board::decode(num)?.best_bucket();
        Ok(profit_from_multiplier(bet_value, best, PLINKO_PAY_OUT_DIVIDER))
    }

    fn best_result(&self, num: u64) -> Result<u64, GameError> {
        let board = Board::decode(num)?;
        let (index, _) = board.best_bucket();
        // Right bounces only, as many as the bucket needs
        Ok((1u64 << (board.rows / 2 + index as u64)) - 1)
    }
}
