//! Random controller
//!
//! Makes random choices from the legal actions. Used by the `simulate`
//! command and by tests that drive whole games.

use crate::core::{PlayerId, Secret};
use crate::game::controller::{PlayerController, TableAction};
use crate::game::view::GameView;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// A controller that makes random choices
pub struct RandomController {
    player_id: PlayerId,
    secret: Secret,
    rng: Box<dyn RngCore + Send>,
}

impl RandomController {
    /// Create a new random controller seeded from the OS
    pub fn new(player_id: PlayerId, secret: Secret) -> Self {
        RandomController {
            player_id,
            secret,
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(player_id: PlayerId, secret: Secret, seed: u64) -> Self {
        RandomController {
            player_id,
            secret,
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomController {
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
        available.choose(&mut self.rng).copied()
    }
}
