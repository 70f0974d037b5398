use super::*;

const SERVER_SEED: &str = "0xbe609aee343fb3c4b28e1df9e632fca64fcfaede20f02e86244efddf30957bd2";

#[test]
fn test_game_type_roundtrip() {
    for game_type in GameType::ALL {
        let decoded = GameType::try_from(game_type.id()).unwrap();
        assert_eq!(game_type, decoded);
    }
    assert_eq!(GameType::try_from(0).unwrap(), GameType::NoGame);
}

#[test]
fn test_game_type_unknown_id() {
    assert_eq!(GameType::try_from(8), Err(UnknownGameType(8)));
    assert_eq!(GameType::try_from(255), Err(UnknownGameType(255)));
}

#[test]
fn test_game_type_ids_are_stable() {
    assert_eq!(GameType::DiceLower.id(), 1);
    assert_eq!(GameType::DiceHigher.id(), 2);
    assert_eq!(GameType::ChooseFrom12.id(), 3);
    assert_eq!(GameType::FlipACoin.id(), 4);
    assert_eq!(GameType::Keno.id(), 5);
    assert_eq!(GameType::Wheel.id(), 6);
    assert_eq!(GameType::Plinko.id(), 7);
}

#[test]
fn test_game_type_serde_name() {
    let json = serde_json::to_string(&GameType::ChooseFrom12).unwrap();
    assert_eq!(json, "\"choose_from_12\"");
    assert_eq!(GameType::ChooseFrom12.to_string(), "choose_from_12");
    let decoded: GameType = serde_json::from_str("\"plinko\"").unwrap();
    assert_eq!(decoded, GameType::Plinko);
}

#[test]
fn test_seed_hex_parsing() {
    let seed: Seed = SERVER_SEED.parse().unwrap();
    assert_eq!(seed.as_bytes().len(), 32);
    assert_eq!(seed.as_bytes()[0], 0xbe);
    assert_eq!(seed.to_string(), SERVER_SEED);

    // Prefix is optional
    let bare = Seed::from_hex(&SERVER_SEED[2..]).unwrap();
    assert_eq!(bare, seed);
}

#[test]
fn test_seed_rejects_bad_hex() {
    assert!(matches!(Seed::from_hex("0xzz"), Err(SeedError::InvalidHex(_))));
    assert!(matches!(Seed::from_hex("0x123"), Err(SeedError::InvalidHex(_))));
}

#[test]
fn test_bet_serde_roundtrip() {
    let bet = Bet {
        game_type: GameType::Keno,
        num: 0b1011,
        value: 10_000_000,
        balance: -1,
        bankroll: 5_000_000_000,
        server_seed: SERVER_SEED.parse().unwrap(),
        user_seed: Seed::new(vec![0x01, 0x02]),
    };
    let json = serde_json::to_string(&bet).unwrap();
    assert!(json.contains("\"user_seed\":\"0x0102\""));
    let decoded: Bet = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, bet);
}
