//! Card types and decks
//!
//! Cards are immutable records created once when the catalog loads. A prompt
//! card carries one or more blanks that players fill with answer cards.

use crate::core::{DeckName, EntityId, GameEntity};
use crate::{CahError, Result};
use serde::{Deserialize, Serialize};

/// Marker for a player-fillable field in a prompt's text
pub const FIELD_MARKER: &str = "___";

pub type PromptId = EntityId<PromptCard>;
pub type AnswerId = EntityId<AnswerCard>;
pub type DeckId = EntityId<Deck>;

/// Count the fillable fields in a prompt text
///
/// Occurrences are counted without overlap, so a run of four underscores is
/// still one field.
pub fn count_fields(text: &str) -> usize {
    text.matches(FIELD_MARKER).count()
}

/// A prompt card with at least one blank
///
/// Construction fails for texts without a blank, so every `PromptCard` in
/// the system has a usable field count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptCard {
    pub id: PromptId,
    pub text: String,
    pub deck_id: DeckId,
    field_count: usize,
}

impl PromptCard {
    pub fn new(id: PromptId, text: impl Into<String>, deck_id: DeckId) -> Result<Self> {
        let text = text.into();
        let field_count = count_fields(&text);
        if field_count < 1 {
            return Err(CahError::PromptWithoutField(text));
        }
        Ok(PromptCard {
            id,
            text,
            deck_id,
            field_count,
        })
    }

    /// Number of answer cards each player submits for this prompt
    pub fn field_count(&self) -> usize {
        self.field_count
    }
}

impl GameEntity<PromptCard> for PromptCard {
    fn id(&self) -> PromptId {
        self.id
    }

    fn name(&self) -> &str {
        &self.text
    }
}

/// An answer card: plain text played into a prompt's blanks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCard {
    pub id: AnswerId,
    pub text: String,
    pub deck_id: DeckId,
}

impl AnswerCard {
    pub fn new(id: AnswerId, text: impl Into<String>, deck_id: DeckId) -> Self {
        AnswerCard {
            id,
            text: text.into(),
            deck_id,
        }
    }
}

impl GameEntity<AnswerCard> for AnswerCard {
    fn id(&self) -> AnswerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.text
    }
}

/// A named group of prompt and answer cards
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: DeckName,
    pub prompt_cards: Vec<PromptCard>,
    pub answer_cards: Vec<AnswerCard>,
}

impl Deck {
    pub fn new(id: DeckId, name: impl Into<DeckName>) -> Self {
        Deck {
            id,
            name: name.into(),
            prompt_cards: Vec::new(),
            answer_cards: Vec::new(),
        }
    }

    pub fn total_cards(&self) -> usize {
        self.prompt_cards.len() + self.answer_cards.len()
    }
}

impl GameEntity<Deck> for Deck {
    fn id(&self) -> DeckId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}
