//! Table event log
//!
//! The coordinator reports every state change as a [`TableEvent`] plus a
//! human-readable line. Lines are printed to stdout, kept in memory, or both.
//! Each event kind carries its own verbosity, so callers never pick a level
//! by hand.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::ops::Deref;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    #[default]
    Stdout,
    /// Kept in memory only (tests)
    Memory,
    Both,
}

/// Kinds of things that happen at a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableEvent {
    Join,
    Leave,
    /// The czar role was assigned or handed on
    Czar,
    GameStart,
    Deal,
    RoundStart,
    Play,
    RoundComplete,
    Reveal,
    RoundWinner,
    GameOver,
    /// Too few players left mid-game
    GameAbandoned,
    /// Lines from outside the coordinator (game loop summaries)
    Note,
}

impl TableEvent {
    /// Lowest verbosity at which this event is printed
    pub fn level(&self) -> VerbosityLevel {
        match self {
            TableEvent::GameStart | TableEvent::GameOver | TableEvent::GameAbandoned => {
                VerbosityLevel::Minimal
            }
            TableEvent::Deal | TableEvent::Play => VerbosityLevel::Verbose,
            _ => VerbosityLevel::Normal,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TableEvent::Join => "join",
            TableEvent::Leave => "leave",
            TableEvent::Czar => "czar",
            TableEvent::GameStart => "game_start",
            TableEvent::Deal => "deal",
            TableEvent::RoundStart => "round_start",
            TableEvent::Play => "play",
            TableEvent::RoundComplete => "round_complete",
            TableEvent::Reveal => "reveal",
            TableEvent::RoundWinner => "round_winner",
            TableEvent::GameOver => "game_over",
            TableEvent::GameAbandoned => "game_abandoned",
            TableEvent::Note => "note",
        }
    }
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub event: TableEvent,
    pub message: String,
}

/// Read access to the in-memory log
pub struct LogGuard<'a> {
    entries: Ref<'a, Vec<LogEntry>>,
}

impl LogGuard<'_> {
    /// Entries of one event kind
    pub fn count(&self, event: TableEvent) -> usize {
        self.entries.iter().filter(|e| e.event == event).count()
    }

    /// Messages in order, without event tags
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }
}

impl Deref for LogGuard<'_> {
    type Target = [LogEntry];

    fn deref(&self) -> &[LogEntry] {
        &self.entries
    }
}

pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    /// Captured entries; every event is kept regardless of verbosity
    entries: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::Stdout,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Keep events in memory and stop printing them
    pub fn enable_capture(&mut self) {
        self.set_output_mode(OutputMode::Memory);
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode != OutputMode::Stdout
    }

    /// Captured entries
    ///
    /// ```ignore
    /// assert_eq!(coordinator.logger().logs().count(TableEvent::Join), 3);
    /// ```
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            entries: self.entries.borrow(),
        }
    }

    /// Take every captured entry, leaving the log empty
    pub fn drain(&mut self) -> Vec<LogEntry> {
        std::mem::take(self.entries.get_mut())
    }

    /// Record an event
    pub fn event(&self, event: TableEvent, message: &str) {
        let level = event.level();
        if self.output_mode != OutputMode::Memory && level <= self.verbosity {
            match level {
                VerbosityLevel::Minimal => println!("{message}"),
                _ => println!("  [{event}] {message}"),
            }
        }
        if self.is_capturing() {
            self.entries.borrow_mut().push(LogEntry {
                event,
                message: message.to_string(),
            });
        }
    }

    /// Free-form line at minimal verbosity
    pub fn note(&self, message: &str) {
        if self.output_mode != OutputMode::Memory && self.verbosity >= VerbosityLevel::Minimal {
            println!("{message}");
        }
        if self.is_capturing() {
            self.entries.borrow_mut().push(LogEntry {
                event: TableEvent::Note,
                message: message.to_string(),
            });
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("captured", &self.entries.borrow().len())
            .finish()
    }
}
