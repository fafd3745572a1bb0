//! Deck directory loader
//!
//! A deck is a directory named after the deck holding up to two text files,
//! one card per line: `prompts.txt` and `answers.txt`. Either file may be
//! missing when the deck has no cards of that kind.

use crate::core::DeckName;
use crate::{CahError, Result};
use std::io::ErrorKind;
use std::path::Path;

pub const PROMPTS_FILE: &str = "prompts.txt";
pub const ANSWERS_FILE: &str = "answers.txt";

/// Raw text of one deck, before cards get IDs
#[derive(Debug, Clone)]
pub struct DeckSource {
    pub name: DeckName,
    pub prompts: Option<String>,
    pub answers: Option<String>,
}

impl DeckSource {
    pub fn new(name: impl Into<DeckName>, prompts: &str, answers: &str) -> Self {
        DeckSource {
            name: name.into(),
            prompts: Some(prompts.to_string()),
            answers: Some(answers.to_string()),
        }
    }

    pub fn prompt_lines(&self) -> impl Iterator<Item = &str> {
        DeckLoader::card_lines(self.prompts.as_deref().unwrap_or(""))
    }

    pub fn answer_lines(&self) -> impl Iterator<Item = &str> {
        DeckLoader::card_lines(self.answers.as_deref().unwrap_or(""))
    }
}

/// Deck loader for deck directories
pub struct DeckLoader;

impl DeckLoader {
    /// Card texts in a card file: one per line, blank lines skipped
    pub fn card_lines(content: &str) -> impl Iterator<Item = &str> {
        content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
    }

    /// Read a deck directory
    pub async fn load_from_dir(dir: &Path) -> Result<DeckSource> {
        let name = dir
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                CahError::InvalidDeckFormat(format!("Deck directory has no usable name: {dir:?}"))
            })?;

        Ok(DeckSource {
            name: DeckName::new(name),
            prompts: read_optional(&dir.join(PROMPTS_FILE)).await?,
            answers: read_optional(&dir.join(ANSWERS_FILE)).await?,
        })
    }
}

/// Read a file, treating "not found" as no content
async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CahError::IoError(e)),
    }
}
