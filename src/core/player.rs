//! Player representation

use crate::core::{AnswerId, EntityId, GameEntity, PlayerName, Secret};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;

pub type PlayerId = EntityId<Player>;

/// Represents a seated player
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique ID for this player
    pub id: PlayerId,

    /// Player name (unique at the table)
    pub name: PlayerName,

    /// Capability token, only revealed to the player at join time
    secret: Secret,

    /// Answer cards held
    pub cards_in_hand: BTreeSet<AnswerId>,

    /// Answer cards submitted this round, in the order they fill the blanks
    pub cards_this_round: SmallVec<[AnswerId; 3]>,

    /// Rounds won in the current game
    pub wins: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<PlayerName>, secret: Secret) -> Self {
        Player {
            id,
            name: name.into(),
            secret,
            cards_in_hand: BTreeSet::new(),
            cards_this_round: SmallVec::new(),
            wins: 0,
        }
    }

    pub fn secret(&self) -> Secret {
        self.secret
    }

    pub fn holds_secret(&self, secret: &Secret) -> bool {
        self.secret == *secret
    }

    /// How many cards short of a full hand this player is
    pub fn missing_cards(&self, hand_size: usize) -> usize {
        hand_size.saturating_sub(self.cards_in_hand.len())
    }

    /// Move a card from hand into this round's plays
    ///
    /// Returns false and changes nothing when the card is not in hand.
    pub fn play_from_hand(&mut self, card: AnswerId) -> bool {
        if !self.cards_in_hand.remove(&card) {
            return false;
        }
        self.cards_this_round.push(card);
        true
    }

    /// Throw away this round's plays (they were scored)
    pub fn discard_round(&mut self) {
        self.cards_this_round.clear();
    }

    /// Take this round's plays back into hand (the round was cancelled)
    pub fn return_round_to_hand(&mut self) {
        self.cards_in_hand.extend(self.cards_this_round.drain(..));
    }

    /// Drop every card, keeping the score
    pub fn clear_cards(&mut self) {
        self.cards_in_hand.clear();
        self.cards_this_round.clear();
    }

    /// Drop every card and score, ready for a fresh game
    pub fn reset_for_new_game(&mut self) {
        self.clear_cards();
        self.wins = 0;
    }

    pub fn summary(&self, is_czar: bool) -> PlayerSummary {
        PlayerSummary {
            id: self.id,
            name: self.name.clone(),
            czar: is_czar,
            wins: self.wins,
        }
    }
}

impl GameEntity<Player> for Player {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Public information about a player, safe to show to everyone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: PlayerName,
    pub czar: bool,
    pub wins: u32,
}

/// What a player receives when joining: their summary plus their secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: PlayerName,
    pub czar: bool,
    pub secret: Secret,
}
