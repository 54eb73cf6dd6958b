//! Board representation and grid utilities
//!
//! This module contains the board value type and the small helpers the
//! engine composes its moves from:
//! - Grid construction, validation and text form
//! - Row reversal and transposition
//! - Empty-cell masks for spawning

/// Empty-cell bitmask
pub mod cells;
/// Grid value type and reflection utilities
pub mod grid;

pub use cells::EmptyCells;
pub use grid::{Grid, empty_board, has_empty_cell, reverse, transpose};
