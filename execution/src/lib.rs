//! Provably fair outcome and payout engine.
//!
//! Every game derives its result from a server seed and a user seed, and
//! prices bets with integer arithmetic only.

pub mod casino;
pub mod config;

pub use casino::{CasinoGame, FairRng, GameError, GameRegistry, Risk, Settlement};
pub use config::{BetLimits, ConfigError};
