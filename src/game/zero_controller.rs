//! Deterministic bot: always takes the first legal action
//!
//! Plays the lowest-numbered cards, reveals, and picks submission 0. Hands are
//! ordered by card ID, so a game played by zero controllers depends only on
//! the table's shuffle seed.

use crate::core::{PlayerId, Secret};
use crate::game::controller::{PlayerController, TableAction};
use crate::game::view::GameView;

pub struct ZeroController {
    player_id: PlayerId,
    secret: Secret,
}

impl ZeroController {
    pub fn new(player_id: PlayerId, secret: Secret) -> Self {
        ZeroController { player_id, secret }
    }
}

impl PlayerController for ZeroController {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn secret(&self) -> Secret {
        self.secret
    }

    fn choose_action(
        &mut self,
        _view: &GameView,
        available: &[TableAction],
    ) -> Option<TableAction> {
        available.first().copied()
    }
}
