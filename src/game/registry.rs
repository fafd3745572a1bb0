//! Player registry
//!
//! Seats players in join order and resolves capability tokens. The registry
//! knows nothing about cards or the czar; the round coordinator owns that.

use crate::config::TableConfig;
use crate::core::{EntityId, Player, PlayerId, PlayerSummary, Secret};
use crate::{CahError, Result};

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    /// Seated players (Vec for stable join order, small count)
    players: Vec<Player>,
    next_id: u32,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        PlayerRegistry {
            players: Vec::new(),
            next_id: 0,
        }
    }

    /// Seat a new player with a fresh secret
    pub fn create(&mut self, name: &str, config: &TableConfig) -> Result<&Player> {
        config.validate_name(name)?;
        if self.players.iter().any(|p| p.name.as_str() == name) {
            return Err(CahError::NameTaken(name.to_string()));
        }

        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let idx = self.players.len();
        self.players.push(Player::new(id, name, Secret::generate()));
        Ok(&self.players[idx])
    }

    pub fn by_secret(&self, secret: &Secret) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.holds_secret(secret))
            .ok_or(CahError::UnknownPlayer)
    }

    pub fn by_secret_mut(&mut self, secret: &Secret) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.holds_secret(secret))
            .ok_or(CahError::UnknownPlayer)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Unseat the player holding `secret`
    pub fn remove(&mut self, secret: &Secret) -> Result<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.holds_secret(secret))
            .ok_or(CahError::UnknownPlayer)?;
        Ok(self.players.remove(idx))
    }

    /// The player seated after `id` in join order, wrapping around
    ///
    /// Returns `None` when `id` is not seated or is the only player.
    pub fn next_after(&self, id: PlayerId) -> Option<PlayerId> {
        if self.players.len() < 2 {
            return None;
        }
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players[(idx + 1) % self.players.len()].id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Public summaries in join order, flagging the czar
    pub fn list(&self, czar: Option<PlayerId>) -> Vec<PlayerSummary> {
        self.players
            .iter()
            .map(|p| p.summary(Some(p.id) == czar))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
