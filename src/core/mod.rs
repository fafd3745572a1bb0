//! Core game types and entities

pub mod card;
pub mod entity;
pub mod player;
pub mod types;

pub use card::{
    count_fields, AnswerCard, AnswerId, Deck, DeckId, PromptCard, PromptId, FIELD_MARKER,
};
pub use entity::{EntityId, EntityStore, GameEntity, IdAllocator};
pub use player::{Player, PlayerId, PlayerRecord, PlayerSummary};
pub use types::{DeckName, PlayerName, Secret};
