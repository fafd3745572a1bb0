//! Shared table handle
//!
//! Request handlers get a cheap clone of `Table`; every operation takes the
//! one lock around the coordinator, so plays, starts and phase reads are
//! linearized and the round-completion check never races another play.

use crate::config::TableConfig;
use crate::core::{AnswerId, DeckId, PlayerRecord, PlayerSummary, Secret};
use crate::game::{GameView, Phase, RoundCoordinator, RoundResult};
use crate::loader::CardCatalog;
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Table {
    inner: Arc<Mutex<RoundCoordinator>>,
}

impl Table {
    pub fn new(catalog: Arc<CardCatalog>, config: TableConfig) -> Self {
        Table {
            inner: Arc::new(Mutex::new(RoundCoordinator::new(catalog, config))),
        }
    }

    /// Load the card catalog from `decks_dir` and open a table on it
    pub async fn open(decks_dir: &Path, config: TableConfig) -> Result<Self> {
        let catalog = CardCatalog::load_from_dir(decks_dir).await?;
        Ok(Self::new(Arc::new(catalog), config))
    }

    pub async fn join_player(&self, name: &str) -> Result<PlayerRecord> {
        self.inner.lock().await.join_player(name)
    }

    pub async fn leave_player(&self, secret: &Secret) -> Result<()> {
        self.inner.lock().await.leave_player(secret)
    }

    pub async fn start_game(&self, secret: &Secret, necessary_wins: u32) -> Result<()> {
        self.inner.lock().await.start_game(secret, necessary_wins)
    }

    pub async fn start_game_with_decks(
        &self,
        secret: &Secret,
        necessary_wins: u32,
        deck_ids: &[DeckId],
    ) -> Result<()> {
        self.inner
            .lock()
            .await
            .start_game_with_decks(secret, necessary_wins, deck_ids)
    }

    pub async fn play_card(&self, secret: &Secret, card: AnswerId) -> Result<()> {
        self.inner.lock().await.play_card(secret, card)
    }

    pub async fn reveal_answers(&self, secret: &Secret) -> Result<()> {
        self.inner.lock().await.reveal_answers(secret)
    }

    pub async fn pick_winner(&self, secret: &Secret, index: usize) -> Result<RoundResult> {
        self.inner.lock().await.pick_winner(secret, index)
    }

    pub async fn game_view(&self, secret: &Secret) -> Result<GameView> {
        self.inner.lock().await.game_view(secret)
    }

    pub async fn phase(&self) -> Phase {
        self.inner.lock().await.phase()
    }

    pub async fn list_players(&self) -> Vec<PlayerSummary> {
        self.inner.lock().await.list_players()
    }

    /// Run `f` with exclusive access to the coordinator
    ///
    /// For bots and tests that need several steps under one lock.
    pub async fn with_coordinator<R>(&self, f: impl FnOnce(&mut RoundCoordinator) -> R) -> R {
        let mut coordinator = self.inner.lock().await;
        f(&mut coordinator)
    }
}
