//! Card catalog loaders
//!
//! Reads deck directories (`prompts.txt` / `answers.txt`) into an immutable
//! card catalog.

pub mod catalog;
pub mod deck;

pub use catalog::CardCatalog;
pub use deck::{DeckLoader, DeckSource};
