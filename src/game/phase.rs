//! Game phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the table is in the round cycle
///
/// Serialized by variant name, which is also the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Lobby: players may join, the czar may start a game
    #[default]
    WaitingToStart,
    /// Non-czar players fill the prompt's blanks from their hands
    PickingAnswers,
    /// Every submission is in and shown to the table
    ShowingAnswers,
    /// The czar chooses the winning submission
    PickingWinner,
}

impl Phase {
    /// Is a game being played right now?
    pub fn is_in_game(&self) -> bool {
        !matches!(self, Phase::WaitingToStart)
    }

    /// Are submissions visible to the table?
    pub fn reveals_submissions(&self) -> bool {
        matches!(self, Phase::ShowingAnswers | Phase::PickingWinner)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::WaitingToStart => "WaitingToStart",
            Phase::PickingAnswers => "PickingAnswers",
            Phase::ShowingAnswers => "ShowingAnswers",
            Phase::PickingWinner => "PickingWinner",
        };
        f.write_str(name)
    }
}
