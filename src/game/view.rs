//! Player-facing snapshots of the table
//!
//! These are what transport code hands back to clients. They never contain
//! another player's secret or hand, and submissions are anonymous.

use crate::core::{AnswerCard, PlayerId, PlayerSummary, PromptCard, PromptId};
use crate::game::Phase;
use serde::{Deserialize, Serialize};

/// A prompt card as shown to players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptView {
    pub id: PromptId,
    pub text: String,
    pub field_count: usize,
}

impl From<&PromptCard> for PromptView {
    fn from(card: &PromptCard) -> Self {
        PromptView {
            id: card.id,
            text: card.text.clone(),
            field_count: card.field_count(),
        }
    }
}

/// One player's answers for the round, identified only by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub index: usize,
    pub cards: Vec<AnswerCard>,
}

/// Everything one player may see about the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub player: PlayerSummary,
    pub hand: Vec<AnswerCard>,
    pub round_plays: Vec<AnswerCard>,
    pub phase: Phase,
    pub prompt: Option<PromptView>,
    /// Filled once every answer is in (`ShowingAnswers`, `PickingWinner`)
    pub submissions: Vec<Submission>,
    pub necessary_wins: Option<u32>,
    pub round_number: u32,
    pub last_winner: Option<PlayerId>,
}

impl GameView {
    /// Blanks this player still has to fill this round
    pub fn plays_remaining(&self) -> usize {
        self.prompt
            .as_ref()
            .map(|prompt| prompt.field_count.saturating_sub(self.round_plays.len()))
            .unwrap_or(0)
    }
}

/// Outcome of the czar's pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: PlayerId,
    pub winner_wins: u32,
    /// The winner reached the win target and the table is back in the lobby
    pub game_over: bool,
}
