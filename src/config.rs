//! Table configuration
//!
//! Table rules (hand size, win target range, name length) and the shuffle
//! seed, tunable by tests and the CLI.

use crate::{CahError, Result};
use serde::{Deserialize, Serialize};

/// Cards each player holds after a deal
pub const CARDS_IN_FULL_HAND: usize = 8;

/// Players needed to start a game, and to keep one going
pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Hand size every deal tops players up to
    pub hand_size: usize,

    /// Smallest accepted win target
    pub min_wins: u32,

    /// Largest accepted win target
    pub max_wins: u32,

    /// Longest accepted player name, in characters
    pub max_name_len: usize,

    /// Seed for shuffling; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl TableConfig {
    pub fn with_seed(seed: u64) -> Self {
        TableConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate_necessary_wins(&self, necessary_wins: u32) -> Result<()> {
        if necessary_wins < self.min_wins || necessary_wins > self.max_wins {
            return Err(CahError::InvalidWinTarget {
                value: necessary_wins,
                min: self.min_wins,
                max: self.max_wins,
            });
        }
        Ok(())
    }

    pub fn validate_name(&self, name: &str) -> Result<()> {
        let len = name.chars().count();
        if len < 1 || len > self.max_name_len {
            return Err(CahError::InvalidName(
                name.to_string(),
                1,
                self.max_name_len,
            ));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            hand_size: CARDS_IN_FULL_HAND,
            min_wins: 1,
            max_wins: 20,
            max_name_len: 20,
            seed: None,
        }
    }
}
