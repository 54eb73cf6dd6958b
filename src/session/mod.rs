//! Game session state owned by front ends
//!
//! Everything the engine deliberately doesn't hold: the running score,
//! one-level undo, game-over and win flags, and high score persistence.

/// High score storage
pub mod high_score;
/// Session state and turn handling
pub mod state;

pub use high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use state::{Session, SessionConfig, Snapshot, TurnOutcome};
