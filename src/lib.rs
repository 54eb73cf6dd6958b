//! Rule engine for a sliding-tile merge puzzle played on a 4x4 grid
//!
//! Given a grid and a direction, the engine computes the resulting grid,
//! whether anything changed, and the score gained. All four directions are
//! one left move seen through reflection and transposition. Random tile
//! spawning, game-over and win detection complete the engine; session state
//! (score, undo, high score) is layered on top for front ends.

#![forbid(unsafe_code)]

/// Compress, merge, directional moves, spawning and terminal detection
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Front-end session state built on the engine's pure outputs
pub mod session;
/// Grid value type and reflection utilities
pub mod spatial;

pub use algorithm::{
    Direction, MoveResult, ScoreRule, has_winning_tile, is_game_over, move_down, move_left,
    move_right, move_up, spawn_random_tile,
};
pub use io::error::{GameError, Result};
pub use spatial::{Grid, empty_board, has_empty_cell};
