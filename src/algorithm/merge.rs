//! Single-row primitives applied to every row of a grid: compress and merge
//!
//! Both work toward column 0. Directional moves reach them through
//! reflection and transposition, so this is the only place merge rules live.

use crate::spatial::Grid;

/// How the points of a move are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoreRule {
    /// Score is the value produced by the last merge of the scan
    ///
    /// Matches the classic web game: a move merging 2+2 and 4+4 scores 8, not 12.
    #[default]
    LastMerge,
    /// Score is the sum of every merged value
    Cumulative,
}

impl ScoreRule {
    /// Fold a newly merged tile value into the running score
    pub const fn accumulate(self, score: u64, merged: u32) -> u64 {
        match self {
            Self::LastMerge => merged as u64,
            Self::Cumulative => score.saturating_add(merged as u64),
        }
    }
}

/// True if two adjacent cells would merge into one tile
///
/// A pair already at the top power of two has nowhere to go and stays put.
pub const fn can_merge(left: u32, right: u32) -> bool {
    left != 0 && left == right && left.checked_mul(2).is_some()
}

/// Slide every non-zero value of each row toward column 0
///
/// Relative order is kept and vacated cells become 0. The flag is true if
/// any value changed column.
pub fn compress(grid: &Grid) -> (Grid, bool) {
    let mut compressed = Grid::empty();
    let mut changed = false;

    for (source, mut target) in grid
        .cells()
        .rows()
        .into_iter()
        .zip(compressed.cells_mut().rows_mut())
    {
        let mut write = 0;
        for (col, &value) in source.iter().enumerate() {
            if value == 0 {
                continue;
            }
            if let Some(cell) = target.get_mut(write) {
                *cell = value;
            }
            changed |= col != write;
            write += 1;
        }
    }

    (compressed, changed)
}

/// Merge equal adjacent tiles of each row, scanning left to right
///
/// The left cell of a pair doubles and the right cell empties. The scan
/// does not skip the emptied cell, so after a compress each row merges at
/// most two disjoint pairs. Returns the grid, whether anything merged, and
/// the score under `rule`.
pub fn merge_left(mut grid: Grid, rule: ScoreRule) -> (Grid, bool, u64) {
    let mut changed = false;
    let mut score = 0;

    for mut row in grid.cells_mut().rows_mut() {
        for col in 1..row.len() {
            let (Some(&left), Some(&right)) = (row.get(col - 1), row.get(col)) else {
                continue;
            };
            if !can_merge(left, right) {
                continue;
            }
            let merged = left * 2;

            if let Some(cell) = row.get_mut(col - 1) {
                *cell = merged;
            }
            if let Some(cell) = row.get_mut(col) {
                *cell = 0;
            }
            changed = true;
            score = rule.accumulate(score, merged);
        }
    }

    (grid, changed, score)
}
