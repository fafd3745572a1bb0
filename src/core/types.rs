//! Names and secrets
//!
//! A player's display name, a deck's directory name and a player's private
//! token are all strings on the wire but never interchangeable here.

use crate::{CahError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display name shown to the rest of the table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: impl Into<String>) -> Self {
        PlayerName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        PlayerName(s)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}

/// Deck name, taken from the deck's directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckName(String);

impl DeckName {
    pub fn new(s: impl Into<String>) -> Self {
        DeckName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeckName {
    fn from(s: &str) -> Self {
        DeckName(s.to_string())
    }
}

/// Capability token identifying a player
///
/// Issued once at join time and only ever shown to its owner. Every protected
/// call presents it; holding the secret is the only proof of identity.
/// Renders as 32 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret(u128);

impl Secret {
    /// Draw a fresh secret from the OS-seeded thread RNG
    ///
    /// Secrets never come from the table's seeded RNG, so replaying a game
    /// with the same seed does not reproduce anyone's token.
    pub fn generate() -> Self {
        Secret(rand::random())
    }

    pub fn from_u128(value: u128) -> Self {
        Secret(value)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

// Keep tokens out of debug output and logs
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(..)")
    }
}

impl FromStr for Secret {
    type Err = CahError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 32 {
            return Err(CahError::InvalidSecret(format!(
                "expected 32 hex digits, got {}",
                s.len()
            )));
        }
        u128::from_str_radix(s, 16)
            .map(Secret)
            .map_err(|e| CahError::InvalidSecret(e.to_string()))
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
