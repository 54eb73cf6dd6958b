//! Directional moves composed from the left move
//!
//! Right, up and down never implement their own sliding: they reflect or
//! transpose the grid, move left, and undo the reflection.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::merge::{ScoreRule, compress, merge_left};
use crate::io::error::{GameError, invalid_parameter};
use crate::spatial::{Grid, reverse, transpose};

/// A direction to slide tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "direction",
                &s,
                &"expected up, down, left or right",
            )),
        }
    }
}

/// Outcome of a single move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Grid after the move
    pub grid: Grid,
    /// True iff at least one cell differs from the input
    pub changed: bool,
    /// Points earned by the move's merges
    pub score: u64,
}

/// Compress, merge, compress again
fn shift_left(grid: &Grid, rule: ScoreRule) -> MoveResult {
    let (compressed, compress_changed) = compress(grid);
    let (merged, merge_changed, score) = merge_left(compressed, rule);
    // Closes gaps left by merges
    let (grid, _) = compress(&merged);

    MoveResult {
        grid,
        changed: compress_changed || merge_changed,
        score,
    }
}

fn shift_right(grid: &Grid, rule: ScoreRule) -> MoveResult {
    let moved = shift_left(&reverse(grid), rule);
    MoveResult {
        grid: reverse(&moved.grid),
        ..moved
    }
}

fn shift_up(grid: &Grid, rule: ScoreRule) -> MoveResult {
    let moved = shift_left(&transpose(grid), rule);
    MoveResult {
        grid: transpose(&moved.grid),
        ..moved
    }
}

fn shift_down(grid: &Grid, rule: ScoreRule) -> MoveResult {
    let moved = shift_right(&transpose(grid), rule);
    MoveResult {
        grid: transpose(&moved.grid),
        ..moved
    }
}

/// Slide and merge every tile in `direction`, scoring with `rule`
///
/// The input is never modified. When `changed` is false the returned grid
/// equals the input.
pub fn apply_move(grid: &Grid, direction: Direction, rule: ScoreRule) -> MoveResult {
    match direction {
        Direction::Left => shift_left(grid, rule),
        Direction::Right => shift_right(grid, rule),
        Direction::Up => shift_up(grid, rule),
        Direction::Down => shift_down(grid, rule),
    }
}

/// Move left with last-merge scoring
pub fn move_left(grid: &Grid) -> MoveResult {
    apply_move(grid, Direction::Left, ScoreRule::LastMerge)
}

/// Move right with last-merge scoring
pub fn move_right(grid: &Grid) -> MoveResult {
    apply_move(grid, Direction::Right, ScoreRule::LastMerge)
}

/// Move up with last-merge scoring
pub fn move_up(grid: &Grid) -> MoveResult {
    apply_move(grid, Direction::Up, ScoreRule::LastMerge)
}

/// Move down with last-merge scoring
pub fn move_down(grid: &Grid) -> MoveResult {
    apply_move(grid, Direction::Down, ScoreRule::LastMerge)
}
