//! Error types for the card game engine

use crate::core::{AnswerId, DeckId, PlayerId};
use crate::game::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`CahError`]
///
/// Transport layers map these to their own status codes: validation and
/// authorization failures are the caller's fault, not-found errors point at
/// stale identifiers, invariant violations are programming errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    NotFound,
    Invariant,
    Io,
}

#[derive(Error, Debug)]
pub enum CahError {
    #[error("Invalid player name '{0}': must be between {1} and {2} characters")]
    InvalidName(String, usize, usize),

    #[error("Name already taken: {0}")]
    NameTaken(String),

    #[error("Number of necessary wins must be between {min} and {max}, got {value}")]
    InvalidWinTarget { value: u32, min: u32, max: u32 },

    #[error("Need at least {required} players to start, have {present}")]
    NotEnoughPlayers { present: usize, required: usize },

    #[error("Selected decks contain no {0} cards")]
    EmptyDeckSelection(&'static str),

    #[error("Wrong game phase: expected {expected}, currently {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("Player {0} is not the card czar")]
    NotCzar(PlayerId),

    #[error("Player {0} is the card czar and cannot play cards")]
    CzarCannotPlay(PlayerId),

    #[error("Player already played {played} of {allowed} cards this round")]
    PlayLimitReached { played: usize, allowed: usize },

    #[error("No player matches the given secret")]
    UnknownPlayer,

    #[error("Card {0} is not in the player's hand")]
    CardNotInHand(AnswerId),

    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(usize),

    #[error("Entity not found: {0}")]
    EntityNotFound(u32),

    #[error("Every prompt card needs at least 1 field: {0:?}")]
    PromptWithoutField(String),

    #[error("Game not set up yet: {0} unavailable")]
    GameNotSetUp(&'static str),

    #[error("Draw pile is empty: {0}")]
    EmptyDrawPile(&'static str),

    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    #[error("Card catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid deck format: {0}")]
    InvalidDeckFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl CahError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CahError::InvalidName(..)
            | CahError::NameTaken(_)
            | CahError::InvalidWinTarget { .. }
            | CahError::NotEnoughPlayers { .. }
            | CahError::EmptyDeckSelection(_)
            | CahError::InvalidSecret(_) => ErrorKind::Validation,

            CahError::WrongPhase { .. }
            | CahError::NotCzar(_)
            | CahError::CzarCannotPlay(_)
            | CahError::PlayLimitReached { .. } => ErrorKind::Authorization,

            CahError::UnknownPlayer
            | CahError::CardNotInHand(_)
            | CahError::DeckNotFound(_)
            | CahError::SubmissionNotFound(_)
            | CahError::EntityNotFound(_) => ErrorKind::NotFound,

            CahError::PromptWithoutField(_)
            | CahError::GameNotSetUp(_)
            | CahError::EmptyDrawPile(_) => ErrorKind::Invariant,

            CahError::CatalogNotFound(_)
            | CahError::InvalidDeckFormat(_)
            | CahError::IoError(_)
            | CahError::JoinError(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CahError>;
