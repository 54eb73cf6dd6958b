//! Terminal-state and win detection

use crate::algorithm::merge::{ScoreRule, can_merge};
use crate::algorithm::moves::{Direction, apply_move};
use crate::spatial::Grid;

/// True iff the grid is full and no two orthogonal neighbours can merge
///
/// Scans row-major and stops at the first empty cell or mergeable pair.
pub fn is_game_over(grid: &Grid) -> bool {
    for ((row, col), &value) in grid.cells().indexed_iter() {
        if value == 0 {
            return false;
        }
        let above = row.checked_sub(1).and_then(|r| grid.get(r, col));
        let before = col.checked_sub(1).and_then(|c| grid.get(row, c));
        let merges = |neighbour: Option<u32>| neighbour.is_some_and(|n| can_merge(n, value));
        if merges(above) || merges(before) {
            return false;
        }
    }
    true
}

/// True iff any tile is at least `target`
pub fn has_winning_tile(grid: &Grid, target: u32) -> bool {
    grid.cells().iter().any(|&value| value >= target)
}

/// True if moving in `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction, ScoreRule::LastMerge).changed
}

/// Directions that would change the grid, in `Direction::ALL` order
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}
