//! Card catalog: every deck known to the table
//!
//! Built once at startup, then shared read-only (behind an `Arc`) by the
//! round coordinator for dealing and for rendering hands.

use crate::core::{
    AnswerCard, AnswerId, Deck, DeckId, EntityStore, IdAllocator, PromptCard, PromptId,
};
use crate::loader::deck::{DeckLoader, DeckSource};
use crate::{CahError, Result};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    /// Decks ordered by name
    decks: Vec<Deck>,
    prompts: EntityStore<PromptCard>,
    answers: EntityStore<AnswerCard>,
    /// Unified ID generator for decks and cards
    ids: IdAllocator,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every deck directory under `decks_dir`
    ///
    /// Decks are read in parallel, one task per directory. A missing
    /// `decks_dir` is fatal: a table without cards cannot run.
    pub async fn load_from_dir(decks_dir: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(decks_dir).await.unwrap_or(false) {
            return Err(CahError::CatalogNotFound(decks_dir.to_path_buf()));
        }

        let mut tasks = Vec::new();
        let mut entries = tokio::fs::read_dir(decks_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let path = entry.path();
            tasks.push(tokio::spawn(
                async move { DeckLoader::load_from_dir(&path).await },
            ));
        }

        // Fail fast on the first broken deck
        let mut sources = Vec::with_capacity(tasks.len());
        for task in tasks {
            sources.push(task.await??);
        }
        // Directory order is platform dependent; IDs must not be
        sources.sort_by(|a, b| a.name.cmp(&b.name));

        let mut catalog = CardCatalog::new();
        for source in sources {
            catalog.add_deck(source)?;
        }
        Ok(catalog)
    }

    /// Add one deck, assigning IDs to it and its cards
    ///
    /// Fails without adding anything if a prompt line has no blank or the
    /// deck name is already taken.
    pub fn add_deck(&mut self, source: DeckSource) -> Result<DeckId> {
        if self.decks.iter().any(|deck| deck.name == source.name) {
            return Err(CahError::InvalidDeckFormat(format!(
                "Duplicate deck name: {}",
                source.name
            )));
        }

        let deck_id = self.ids.next_id();
        let mut deck = Deck::new(deck_id, source.name.clone());
        for line in source.prompt_lines() {
            deck.prompt_cards
                .push(PromptCard::new(self.ids.next_id(), line, deck_id)?);
        }
        for line in source.answer_lines() {
            deck.answer_cards
                .push(AnswerCard::new(self.ids.next_id(), line, deck_id));
        }

        for card in &deck.prompt_cards {
            self.prompts.insert(card.id, card.clone());
        }
        for card in &deck.answer_cards {
            self.answers.insert(card.id, card.clone());
        }
        self.decks.push(deck);
        Ok(deck_id)
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, id: DeckId) -> Result<&Deck> {
        self.decks
            .iter()
            .find(|deck| deck.id == id)
            .ok_or(CahError::DeckNotFound(id))
    }

    pub fn deck_by_name(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.name.as_str() == name)
    }

    pub fn answer_card(&self, id: AnswerId) -> Result<&AnswerCard> {
        self.answers.get(id)
    }

    pub fn prompt_card(&self, id: PromptId) -> Result<&PromptCard> {
        self.prompts.get(id)
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}
