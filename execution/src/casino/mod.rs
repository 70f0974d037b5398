//! Casino game execution module.
//!
//! This module contains the outcome and payout logic for all games:
//! - Dice (lower / higher)
//! - Choose from 12
//! - Flip a coin
//! - Keno
//! - Wheel
//! - Plinko
//!
//! Every operation is a pure function of its arguments. Outcomes are derived
//! from the server and user seeds only, so anyone holding both seeds can
//! recompute and audit a round.

pub mod bits;
pub mod choose_from_12;
pub mod dice_higher;
pub mod dice_lower;
pub mod flip_a_coin;
#[cfg(test)]
mod integration_tests;
pub mod keno;
pub mod payout;
pub mod plinko;
pub mod registry;
mod risk;
pub mod wheel;

pub use registry::{GameRegistry, Settlement};
pub use risk::Risk;

use fairplay_types::casino::{GameType, UnknownGameType};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Keccak-256 with the pre-NIST padding, as used by Ethereum.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Reduce a big-endian unsigned integer modulo `n`.
///
/// Folding byte by byte keeps the accumulator below `n`, so the reduction is
/// exact for digests of any length.
fn reduce(bytes: &[u8], n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let n = n as u128;
    bytes
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % n) as u64
}

/// Fair random draw derived from a server seed and a user seed.
///
/// The draw is `Keccak256(server_seed || user_seed)` interpreted as a 256-bit
/// big-endian integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairRng {
    digest: [u8; 32],
}

impl FairRng {
    /// Create a new draw from the raw seed bytes.
    pub fn new(server_seed: &[u8], user_seed: &[u8]) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(server_seed);
        hasher.update(user_seed);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Self { digest }
    }

    /// The raw 32-byte digest.
    pub fn digest(&self) -> [u8; 32] {
        self.digest
    }

    /// The draw reduced modulo `n` (returns 0 when `n` is 0).
    pub fn modulo(&self, n: u64) -> u64 {
        reduce(&self.digest, n)
    }

    /// The lowest `width` bits of the draw.
    pub fn low_bits(&self, width: u32) -> u64 {
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&self.digest[24..]);
        let tail = u64::from_be_bytes(tail);
        if width >= u64::BITS {
            tail
        } else {
            tail & ((1u64 << width) - 1)
        }
    }

    /// Draw `k` distinct positions out of `n` and return them as a bitmask.
    ///
    /// Step `i` reduces the current digest modulo `n - i` to pick the j-th
    /// position not yet chosen (scanning upwards from 0), then rehashes the
    /// digest for the next step. Exactly `min(k, n)` bits end up set.
    pub fn draw_without_replacement(&self, n: u32, k: u32) -> u64 {
        let n = n.min(u64::BITS);
        let k = k.min(n);

        let mut chosen = 0u64;
        let mut seed = self.digest;
        for i in 0..k {
            let j = reduce(&seed, (n - i) as u64) as usize;
            if let Some(position) = (0..n).filter(|p| chosen & (1u64 << p) == 0).nth(j) {
                chosen |= 1u64 << position;
            }
            seed = keccak256(&seed);
        }
        chosen
    }
}

/// Error during game evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Selection does not decode for this game.
    #[error("invalid selection {0}")]
    InvalidSelection(u64),
    /// Result number is outside the game's range.
    #[error("invalid result number {0}")]
    InvalidResult(u64),
    /// Win probability admits no positive max bet.
    #[error("invalid win probability {0}")]
    InvalidProbability(u64),
    /// No game is registered for the identifier.
    #[error("unknown game type {0}")]
    UnknownGameType(u8),
}

impl From<UnknownGameType> for GameError {
    fn from(err: UnknownGameType) -> Self {
        GameError::UnknownGameType(err.0)
    }
}

/// Trait for casino game implementations.
///
/// Amounts are in the bet's minor unit. Gross payouts are computed in 128-bit
/// integers, so no `u64` input can overflow.
pub trait CasinoGame: Send + Sync {
    /// Identifier of this game.
    fn game_type(&self) -> GameType;

    /// Largest bet `bankroll` can cover for selection `num`.
    fn max_bet(&self, num: u64, bankroll: u64) -> Result<u128, GameError>;

    /// Fair result for the given seeds. Only some games need `num`.
    fn result_number(
        &self,
        server_seed: &[u8],
        user_seed: &[u8],
        num: u64,
    ) -> Result<u64, GameError>;

    /// Signed profit of a concluded round (`-bet_value` on a loss).
    fn user_profit(&self, num: u64, bet_value: u64, result: u64) -> Result<i128, GameError>;

    /// Profit at the best possible result for `num`.
    fn max_user_profit(&self, num: u64, bet_value: u64) -> Result<i128, GameError>;

    /// A result attaining [CasinoGame::max_user_profit] for `num`.
    fn best_result(&self, num: u64) -> Result<u64, GameError>;
}
