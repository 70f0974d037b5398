use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Game identifiers as carried in bet records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum GameType {
    NoGame = 0,
    DiceLower = 1,
    DiceHigher = 2,
    #[serde(rename = "choose_from_12")]
    ChooseFrom12 = 3,
    FlipACoin = 4,
    Keno = 5,
    Wheel = 6,
    Plinko = 7,
}

impl GameType {
    /// Every playable game (excludes [GameType::NoGame]).
    pub const ALL: [GameType; 7] = [
        GameType::DiceLower,
        GameType::DiceHigher,
        GameType::ChooseFrom12,
        GameType::FlipACoin,
        GameType::Keno,
        GameType::Wheel,
        GameType::Plinko,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Raised for a game id with no known [GameType].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown game type {0}")]
pub struct UnknownGameType(pub u8);

impl TryFrom<u8> for GameType {
    type Error = UnknownGameType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameType::NoGame),
            1 => Ok(GameType::DiceLower),
            2 => Ok(GameType::DiceHigher),
            3 => Ok(GameType::ChooseFrom12),
            4 => Ok(GameType::FlipACoin),
            5 => Ok(GameType::Keno),
            6 => Ok(GameType::Wheel),
            7 => Ok(GameType::Plinko),
            i => Err(UnknownGameType(i)),
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameType::NoGame => "no_game",
            GameType::DiceLower => "dice_lower",
            GameType::DiceHigher => "dice_higher",
            GameType::ChooseFrom12 => "choose_from_12",
            GameType::FlipACoin => "flip_a_coin",
            GameType::Keno => "keno",
            GameType::Wheel => "wheel",
            GameType::Plinko => "plinko",
        };
        f.write_str(name)
    }
}
