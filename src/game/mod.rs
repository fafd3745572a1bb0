//! Table state and round structure

pub mod controller;
pub mod game_loop;
pub mod logger;
pub mod phase;
pub mod random_controller;
pub mod registry;
pub mod round;
pub mod state;
pub mod view;
pub mod zero_controller;

pub use controller::{available_actions, PlayerController, TableAction};
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use logger::{GameLogger, LogEntry, OutputMode, TableEvent};
pub use phase::Phase;
pub use random_controller::RandomController;
pub use registry::PlayerRegistry;
pub use round::RoundCoordinator;
pub use state::GameState;
pub use view::{GameView, PromptView, RoundResult, Submission};
pub use zero_controller::ZeroController;
