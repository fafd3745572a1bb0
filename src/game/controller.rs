//! Player controller trait
//!
//! This module defines the interface between the table and automated players.
//! The game loop hands each controller the same `GameView` a human client
//! would get, along with the actions that are legal for it right now, and
//! applies whatever the controller picks.

use crate::core::{AnswerId, PlayerId, Secret};
use crate::game::view::GameView;
use crate::game::Phase;
use smallvec::SmallVec;

/// Something a player can do at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Fill the next blank with a card from hand
    PlayCard(AnswerId),

    /// Czar: flip the submissions over for judging
    RevealAnswers,

    /// Czar: choose the winning submission by display index
    PickWinner(usize),
}

/// Actions the viewing player may take right now
pub fn available_actions(view: &GameView) -> SmallVec<[TableAction; 8]> {
    let czar = view.player.czar;
    match view.phase {
        Phase::PickingAnswers if !czar && view.plays_remaining() > 0 => view
            .hand
            .iter()
            .map(|card| TableAction::PlayCard(card.id))
            .collect(),
        Phase::ShowingAnswers if czar => SmallVec::from_elem(TableAction::RevealAnswers, 1),
        Phase::PickingWinner if czar => view
            .submissions
            .iter()
            .map(|submission| TableAction::PickWinner(submission.index))
            .collect(),
        _ => SmallVec::new(),
    }
}

/// Decision interface for a seated player
pub trait PlayerController {
    /// The player this controller acts for
    fn player_id(&self) -> PlayerId;

    /// The capability token it acts with
    fn secret(&self) -> Secret;

    /// Pick one of `available` (never empty), or `None` to wait
    fn choose_action(
        &mut self,
        view: &GameView,
        available: &[TableAction],
    ) -> Option<TableAction>;

    /// Optional: Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameView, _won: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnswerCard, EntityId, PlayerName, PlayerSummary};
    use crate::game::view::{PromptView, Submission};

    fn view(phase: Phase, czar: bool) -> GameView {
        let deck = EntityId::new(0);
        GameView {
            player: PlayerSummary {
                id: EntityId::new(1),
                name: PlayerName::new("Bot"),
                czar,
                wins: 0,
            },
            hand: (10..13)
                .map(|i| AnswerCard::new(EntityId::new(i), format!("Card {i}"), deck))
                .collect(),
            round_plays: Vec::new(),
            phase,
            prompt: Some(PromptView {
                id: EntityId::new(2),
                text: "Why ___?".to_string(),
                field_count: 1,
            }),
            submissions: (0..2)
                .map(|index| Submission {
                    index,
                    cards: Vec::new(),
                })
                .collect(),
            necessary_wins: Some(3),
            round_number: 1,
            last_winner: None,
        }
    }

    #[test]
    fn test_players_may_play_hand_cards() {
        let actions = available_actions(&view(Phase::PickingAnswers, false));
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], TableAction::PlayCard(EntityId::new(10)));
    }

    #[test]
    fn test_czar_waits_while_answers_are_picked() {
        assert!(available_actions(&view(Phase::PickingAnswers, true)).is_empty());
        assert!(available_actions(&view(Phase::WaitingToStart, true)).is_empty());
    }

    #[test]
    fn test_filled_blanks_leave_nothing_to_play() {
        let mut view = view(Phase::PickingAnswers, false);
        view.round_plays.push(view.hand.remove(0));
        assert!(available_actions(&view).is_empty());
    }

    #[test]
    fn test_czar_judges() {
        assert_eq!(
            available_actions(&view(Phase::ShowingAnswers, true)).as_slice(),
            &[TableAction::RevealAnswers]
        );
        assert_eq!(
            available_actions(&view(Phase::PickingWinner, true)).as_slice(),
            &[TableAction::PickWinner(0), TableAction::PickWinner(1)]
        );
        assert!(available_actions(&view(Phase::PickingWinner, false)).is_empty());
    }
}
