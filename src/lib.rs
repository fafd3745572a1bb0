//! Card Czar - session and round engine for a fill-in-the-blank party card game
//!
//! One table per process: players join with a name and get back a secret,
//! the first joiner becomes the card czar, the czar starts a game, everyone
//! else fills the prompt's blanks from their hand, and the czar picks the
//! funniest submission until somebody reaches the win target.

pub mod config;
pub mod core;
pub mod draw_pile;
pub mod error;
pub mod game;
pub mod loader;
pub mod table;

pub use config::TableConfig;
pub use error::{CahError, ErrorKind, Result};
pub use table::Table;
