//! Lookup from [GameType] to its implementation, plus the dispatch helpers
//! collaborators call with a game identifier.

use super::choose_from_12::ChooseFrom12;
use super::dice_higher::DiceHigher;
use super::dice_lower::DiceLower;
use super::flip_a_coin::FlipACoin;
use super::keno::Keno;
use super::plinko::Plinko;
use super::wheel::Wheel;
use super::{CasinoGame, GameError};
use crate::config::BetLimits;
use fairplay_types::casino::{Bet, GameType};
use tracing::{debug, warn};

/// Outcome of settling a [Bet].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub result: u64,
    pub profit: i128,
    pub new_balance: i128,
    /// Best-case profit for the bet's selection.
    pub max_profit: i128,
}

/// Stateless registry of every playable game.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameRegistry;

static GLOBAL: GameRegistry = GameRegistry::new();

impl GameRegistry {
    pub const fn new() -> Self {
        Self
    }

    /// Process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn game(&self, game_type: GameType) -> Result<&'static dyn CasinoGame, GameError> {
        let game: &'static dyn CasinoGame = match game_type {
            GameType::DiceLower => &DiceLower,
            GameType::DiceHigher => &DiceHigher,
            GameType::ChooseFrom12 => &ChooseFrom12,
            GameType::FlipACoin => &FlipACoin,
            GameType::Keno => &Keno,
            GameType::Wheel => &Wheel,
            GameType::Plinko => &Plinko,
            GameType::NoGame => {
                warn!(game = %game_type, "no implementation for game");
                return Err(GameError::UnknownGameType(game_type.id()));
            }
        };
        Ok(game)
    }

    pub fn game_by_id(&self, id: u8) -> Result<&'static dyn CasinoGame, GameError> {
        let game_type = GameType::try_from(id).map_err(|err| {
            warn!(id, "unknown game id");
            GameError::from(err)
        })?;
        self.game(game_type)
    }

    pub fn max_bet(&self, game_type: GameType, num: u64, bankroll: u64) -> Result<u128, GameError> {
        let max_bet = self
            .game(game_type)?
            .max_bet(num, bankroll)
            .inspect_err(|err| reject(game_type, num, err))?;
        debug!(game = %game_type, num, bankroll, max_bet, "computed max bet");
        Ok(max_bet)
    }

    /// Raw max bet scaled down by `limits`.
    pub fn max_bet_with_limits(
        &self,
        game_type: GameType,
        num: u64,
        bankroll: u64,
        limits: &BetLimits,
    ) -> Result<u128, GameError> {
        let raw = self.max_bet(game_type, num, bankroll)?;
        Ok(limits.apply(raw))
    }

    pub fn result_number(
        &self,
        game_type: GameType,
        num: u64,
        server_seed: &[u8],
        user_seed: &[u8],
    ) -> Result<u64, GameError> {
        let result = self
            .game(game_type)?
            .result_number(server_seed, user_seed, num)
            .inspect_err(|err| reject(game_type, num, err))?;
        debug!(game = %game_type, num, result, "drew result");
        Ok(result)
    }

    pub fn user_profit(
        &self,
        game_type: GameType,
        num: u64,
        bet_value: u64,
        result: u64,
    ) -> Result<i128, GameError> {
        let profit = self
            .game(game_type)?
            .user_profit(num, bet_value, result)
            .inspect_err(|err| reject(game_type, num, err))?;
        debug!(game = %game_type, num, result, profit, "computed profit");
        Ok(profit)
    }

    pub fn max_user_profit(
        &self,
        game_type: GameType,
        num: u64,
        bet_value: u64,
    ) -> Result<i128, GameError> {
        self.game(game_type)?
            .max_user_profit(num, bet_value)
            .inspect_err(|err| reject(game_type, num, err))
    }

    /// `old_balance` plus the profit of the round the seeds decide.
    pub fn new_balance(
        &self,
        game_type: GameType,
        num: u64,
        bet_value: u64,
        server_seed: &[u8],
        user_seed: &[u8],
        old_balance: i128,
    ) -> Result<i128, GameError> {
        let result = self.result_number(game_type, num, server_seed, user_seed)?;
        let profit = self.user_profit(game_type, num, bet_value, result)?;
        Ok(old_balance + profit)
    }

    /// Resolve a bet the caller has already authorized.
    pub fn settle(&self, bet: &Bet) -> Result<Settlement, GameError> {
        let game = self.game(bet.game_type)?;
        let on_err = |err: &GameError| reject(bet.game_type, bet.num, err);

        let max_profit = game.max_user_profit(bet.num, bet.value).inspect_err(on_err)?;
        let result = game
            .result_number(bet.server_seed.as_ref(), bet.user_seed.as_ref(), bet.num)
            .inspect_err(on_err)?;
        let profit = game
            .user_profit(bet.num, bet.value, result)
            .inspect_err(on_err)?;
        let settlement = Settlement {
            result,
            profit,
            new_balance: bet.balance + profit,
            max_profit,
        };
        debug!(
            game = %bet.game_type,
            num = bet.num,
            value = bet.value,
            result,
            profit,
            "settled bet"
        );
        Ok(settlement)
    }
}

fn reject(game_type: GameType, num: u64, err: &GameError) {
    warn!(game = %game_type, num, ?err, "rejected game call");
}
