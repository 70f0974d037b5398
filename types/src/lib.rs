//! Plain data shared between the fairplay engine and its collaborators.
//!
//! Nothing here computes an outcome: the game logic lives in `fairplay-execution`.

pub mod casino;

pub use casino::{Bet, GameType, Seed};
