//! Integration tests for casino game execution.
//!
//! These tests drive every game through the registry, from drawing a result
//! with real seeds to settling the balance.

#[cfg(test)]
mod tests {
    use crate::casino::{FairRng, GameError, GameRegistry, Risk};
    use crate::config::BetLimits;
    use fairplay_types::casino::{Bet, GameType, Seed};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// A handful of valid selections per game.
    fn selections(game_type: GameType) -> Vec<u64> {
        match game_type {
            GameType::DiceLower => vec![1, 25, 50, 75, 98],
            GameType::DiceHigher => vec![0, 24, 49, 75, 97],
            GameType::ChooseFrom12 => vec![1, 0b11, 0x0f0, 0x555, 4094],
            GameType::FlipACoin => vec![0, 1],
            GameType::Keno => vec![1, 1 << 39, 0b1011, 0x104445, 0x3ff, 0x80_4020_1008],
            GameType::Wheel => Risk::ALL
                .into_iter()
                .flat_map(|risk| [risk.selection(10), risk.selection(20)])
                .collect(),
            GameType::Plinko => Risk::ALL
                .into_iter()
                .flat_map(|risk| [8, 12, 16].map(|rows| risk.selection(rows)))
                .collect(),
            GameType::NoGame => vec![],
        }
    }

    fn random_seeds(rng: &mut StdRng) -> ([u8; 32], [u8; 32]) {
        (rng.gen(), rng.gen())
    }

    /// Test that every game resolves real draws within its bounds.
    #[test]
    fn test_all_games_settle() {
        let registry = GameRegistry::global();
        let mut rng = StdRng::seed_from_u64(1);
        let bet_value = 1_000_000;

        for game_type in GameType::ALL {
            for num in selections(game_type) {
                let max_profit = registry
                    .max_user_profit(game_type, num, bet_value)
                    .unwrap();
                for _ in 0..50 {
                    let (server, user) = random_seeds(&mut rng);
                    let result = registry
                        .result_number(game_type, num, &server, &user)
                        .unwrap();
                    let profit = registry
                        .user_profit(game_type, num, bet_value, result)
                        .unwrap();
                    assert!(
                        profit >= -(bet_value as i128),
                        "{game_type} {num}: lost more than the stake"
                    );
                    assert!(
                        profit <= max_profit,
                        "{game_type} {num}: profit {profit} above best case {max_profit}"
                    );
                }
            }
        }
    }

    /// Test that the best result of every selection pays the best-case profit.
    #[test]
    fn test_best_result_attains_max_profit() {
        let registry = GameRegistry::global();
        for game_type in GameType::ALL {
            let game = registry.game(game_type).unwrap();
            for num in selections(game_type) {
                let best = game.best_result(num).unwrap();
                for bet_value in [1, 333, 1_000_000, u64::MAX] {
                    assert_eq!(
                        game.user_profit(num, bet_value, best),
                        game.max_user_profit(num, bet_value),
                        "{game_type} {num}"
                    );
                }
            }
        }
    }

    /// Test that outcomes depend on nothing but the inputs.
    #[test]
    fn test_deterministic_outcomes() {
        let registry = GameRegistry::new();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let (server, user) = random_seeds(&mut rng);
            for game_type in GameType::ALL {
                for num in selections(game_type) {
                    let first = registry.new_balance(game_type, num, 1000, &server, &user, 0);
                    let second = registry.new_balance(game_type, num, 1000, &server, &user, 0);
                    assert_eq!(first, second);
                }
            }
        }
    }

    /// Test that swapping the seeds yields a different draw.
    #[test]
    fn test_seed_order_matters() {
        let server = [0x01];
        let user = [0x02];
        assert_ne!(
            FairRng::new(&server, &user).digest(),
            FairRng::new(&user, &server).digest()
        );
    }

    /// Test pinned results for every game with fixed seeds.
    #[test]
    fn test_result_regression() {
        let registry = GameRegistry::global();
        let server = [0x01];
        let user = [0x02];
        let cases = [
            (GameType::DiceLower, 50, 2),
            (GameType::DiceHigher, 50, 2),
            (GameType::ChooseFrom12, 1, 6),
            (GameType::FlipACoin, 1, 0),
            (GameType::Keno, 1, 0x20_0660_203c),
            (GameType::Wheel, 110, 402),
            (GameType::Plinko, 108, 218),
            (GameType::Plinko, 212, 3546),
            (GameType::Plinko, 316, 40410),
        ];
        for (game_type, num, expected) in cases {
            assert_eq!(
                registry.result_number(game_type, num, &server, &user),
                Ok(expected),
                "{game_type} {num}"
            );
        }
    }

    /// Test that every Keno draw marks exactly ten distinct fields.
    #[test]
    fn test_keno_draws_ten_fields() {
        let registry = GameRegistry::global();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let (server, user) = random_seeds(&mut rng);
            let result = registry
                .result_number(GameType::Keno, 1, &server, &user)
                .unwrap();
            assert_eq!(result.count_ones(), 10);
            assert_eq!(result >> 40, 0);
        }
    }

    /// Test settling recorded bets end to end.
    #[test]
    fn test_settle_bets() {
        let registry = GameRegistry::global();
        let mut rng = StdRng::seed_from_u64(4);
        for game_type in GameType::ALL {
            for num in selections(game_type) {
                let (server, user) = random_seeds(&mut rng);
                let bet = Bet {
                    game_type,
                    num,
                    value: 5_000,
                    balance: 10_000,
                    bankroll: 1_000_000_000,
                    server_seed: Seed::from(server),
                    user_seed: Seed::from(user),
                };
                let settlement = registry.settle(&bet).unwrap();
                assert_eq!(
                    registry.new_balance(game_type, num, 5_000, &server, &user, 10_000),
                    Ok(settlement.new_balance)
                );
                assert_eq!(settlement.new_balance, 10_000 + settlement.profit);
                assert!(settlement.profit <= settlement.max_profit);
            }
        }
    }

    /// Test that a bet survives a JSON round trip and settles identically.
    #[test]
    fn test_settle_decoded_bet() {
        let json = r#"{
            "game_type": "plinko",
            "num": 212,
            "value": 1000,
            "balance": -250,
            "bankroll": 1000000,
            "server_seed": "0x01",
            "user_seed": "0x02"
        }"#;
        let bet: Bet = serde_json::from_str(json).unwrap();
        let settlement = GameRegistry::global().settle(&bet).unwrap();
        assert_eq!(settlement.result, 3546);
        assert_eq!(settlement.new_balance, 150);
    }

    /// Test limit scaling for every game stays below the raw max bet.
    #[test]
    fn test_max_bet_with_limits() {
        let registry = GameRegistry::global();
        let limits = BetLimits::default();
        let bankroll = 1_000_000_000_000;
        for game_type in GameType::ALL {
            for num in selections(game_type) {
                let raw = match registry.max_bet(game_type, num, bankroll) {
                    Ok(raw) => raw,
                    Err(GameError::InvalidProbability(_)) => continue,
                    Err(err) => panic!("{game_type} {num}: {err}"),
                };
                let limited = registry
                    .max_bet_with_limits(game_type, num, bankroll, &limits)
                    .unwrap();
                assert!(limited <= raw / 2);
                assert_eq!(limited % limits.granularity as u128, 0);
            }
        }
    }

    /// Test that unknown identifiers are rejected everywhere.
    #[test]
    fn test_unknown_games_rejected() {
        let registry = GameRegistry::global();
        for id in [0, 8, 200, 255] {
            assert!(matches!(
                registry.game_by_id(id),
                Err(GameError::UnknownGameType(got)) if got == id
            ));
        }
        assert_eq!(
            registry.new_balance(GameType::NoGame, 1, 1000, &[0x01], &[0x02], 0),
            Err(GameError::UnknownGameType(0))
        );
    }

    /// Test that invalid selections fail before any result is computed.
    #[test]
    fn test_invalid_selections_rejected() {
        let registry = GameRegistry::global();
        let cases = [
            (GameType::DiceLower, 0),
            (GameType::DiceLower, 100),
            (GameType::DiceHigher, 99),
            (GameType::ChooseFrom12, 0),
            (GameType::ChooseFrom12, 4095),
            (GameType::FlipACoin, 2),
            (GameType::Keno, 0),
            (GameType::Keno, 0x7ff),
            (GameType::Wheel, 115),
            (GameType::Plinko, 400),
        ];
        for (game_type, num) in cases {
            assert_eq!(
                registry.max_user_profit(game_type, num, 1000),
                Err(GameError::InvalidSelection(num)),
                "{game_type} {num}"
            );
            assert_eq!(
                registry.max_bet(game_type, num, 1_000_000),
                Err(GameError::InvalidSelection(num)),
                "{game_type} {num}"
            );
        }
    }
}
