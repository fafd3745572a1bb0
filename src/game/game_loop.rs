//! Game loop implementation
//!
//! Drives a table with automated player controllers: the czar starts the
//! game, then every controller is offered its legal actions in seat order
//! until somebody reaches the win target.

use crate::core::{PlayerId, PlayerSummary};
use crate::game::controller::{available_actions, PlayerController, TableAction};
use crate::game::{Phase, RoundCoordinator};
use crate::{CahError, Result};

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game start and outcome
    Minimal = 1,
    /// Normal - joins, rounds, winners (default)
    #[default]
    Normal = 2,
    /// Verbose - every card played and dealt
    Verbose = 3,
}

/// Result of running a game to completion
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Winner of the game (None if the game didn't complete)
    pub winner: Option<PlayerId>,
    /// Rounds judged by a czar
    pub rounds_played: u32,
    /// Reason the game ended
    pub end_reason: GameEndReason,
    /// Final scores in seat order
    pub scores: Vec<PlayerSummary>,
}

/// Reason the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEndReason {
    /// A player reached the win target
    WinTarget(PlayerId),
    /// Game reached the maximum number of actions
    ActionLimit,
    /// No controller could or would act
    Stalled,
}

/// Game loop manager
pub struct GameLoop<'a> {
    /// The table being played
    pub table: &'a mut RoundCoordinator,
    /// Maximum actions before giving up
    max_actions: u32,
    /// Actions applied so far
    actions_taken: u32,
    /// Rounds judged so far
    rounds_played: u32,
}

impl<'a> GameLoop<'a> {
    pub fn new(table: &'a mut RoundCoordinator) -> Self {
        GameLoop {
            table,
            max_actions: 10_000,
            actions_taken: 0,
            rounds_played: 0,
        }
    }

    /// Set maximum actions before the loop gives up
    pub fn with_max_actions(mut self, max_actions: u32) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Set verbosity on the table's logger
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.table.logger_mut().set_verbosity(verbosity);
        self
    }

    pub fn actions_taken(&self) -> u32 {
        self.actions_taken
    }

    /// Start a game and run it to completion
    ///
    /// Every seated player must have a controller; the czar's controller
    /// starts the game.
    pub fn run_game(
        &mut self,
        controllers: &mut [Box<dyn PlayerController>],
        necessary_wins: u32,
    ) -> Result<GameResult> {
        let czar = self
            .table
            .state()
            .czar()
            .ok_or(CahError::GameNotSetUp("card czar"))?;
        let starter = controllers
            .iter()
            .find(|controller| controller.player_id() == czar)
            .ok_or(CahError::NotCzar(czar))?
            .secret();
        self.table.start_game(&starter, necessary_wins)?;

        let end_reason = loop {
            if self.table.phase() == Phase::WaitingToStart {
                match self.table.state().last_winner() {
                    Some(winner) => break GameEndReason::WinTarget(winner),
                    None => break GameEndReason::Stalled,
                }
            }
            if self.actions_taken >= self.max_actions {
                break GameEndReason::ActionLimit;
            }
            if !self.run_pass(controllers)? {
                break GameEndReason::Stalled;
            }
        };

        let winner = match end_reason {
            GameEndReason::WinTarget(winner) => Some(winner),
            _ => None,
        };
        match winner.and_then(|id| self.table.players().get(id)) {
            Some(player) => self.table.logger().note(&format!(
                "{} won after {} rounds",
                player.name, self.rounds_played
            )),
            None => self
                .table
                .logger()
                .note(&format!("Game ended without a winner: {end_reason:?}")),
        }

        for controller in controllers.iter_mut() {
            let view = self.table.game_view(&controller.secret())?;
            controller.on_game_end(&view, winner == Some(controller.player_id()));
        }

        Ok(GameResult {
            winner,
            rounds_played: self.rounds_played,
            end_reason,
            scores: self.table.list_players(),
        })
    }

    /// Offer every controller its legal actions once
    ///
    /// Returns whether anything was applied.
    fn run_pass(&mut self, controllers: &mut [Box<dyn PlayerController>]) -> Result<bool> {
        let mut progressed = false;
        for controller in controllers.iter_mut() {
            if self.actions_taken >= self.max_actions {
                break;
            }
            let secret = controller.secret();
            let view = self.table.game_view(&secret)?;
            let available = available_actions(&view);
            if available.is_empty() {
                continue;
            }
            let Some(action) = controller.choose_action(&view, &available) else {
                continue;
            };

            match action {
                TableAction::PlayCard(card) => self.table.play_card(&secret, card)?,
                TableAction::RevealAnswers => self.table.reveal_answers(&secret)?,
                TableAction::PickWinner(index) => {
                    self.table.pick_winner(&secret, index)?;
                    self.rounds_played += 1;
                }
            }
            self.actions_taken += 1;
            progressed = true;
        }
        Ok(progressed)
    }
}
