use super::GameType;
use commonware_utils::{from_hex_formatted, hex};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed must be hex: {0}")]
    InvalidHex(String),
}

/// Raw seed bytes revealed by the server or chosen by the user.
///
/// Seeds travel as `0x`-prefixed hex; the prefix is optional when parsing.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Seed(Vec<u8>);

impl Seed {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_hex(value: &str) -> Result<Self, SeedError> {
        from_hex_formatted(value)
            .map(Self)
            .ok_or_else(|| SeedError::InvalidHex(value.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Seed {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for Seed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex(&self.0))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({self})")
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Seed::from_hex(&value).map_err(de::Error::custom)
    }
}

/// A decoded, already-authorized bet.
///
/// `value` and `bankroll` are in gwei. `balance` is the user's running
/// balance before this bet settles and may be negative mid-session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub game_type: GameType,
    pub num: u64,
    pub value: u64,
    pub balance: i128,
    pub bankroll: u64,
    pub server_seed: Seed,
    pub user_seed: Seed,
}
