use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::Grid;

/// Row-major bitmask of the empty cells of a grid
///
/// Bit `row * size + col` is set when that cell holds 0. Lets spawning pick
/// uniformly among empty positions without retrying occupied ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyCells {
    bits: BitVec,
    size: usize,
}

impl EmptyCells {
    /// Capture the empty cells of `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            bits: grid.cells().iter().map(|&value| value == 0).collect(),
            size: grid.size(),
        }
    }

    /// Number of empty cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// True if the grid had no empty cell
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test whether a position was empty
    pub fn contains(&self, row: usize, col: usize) -> bool {
        col < self.size && self.bits.get(row * self.size + col).as_deref() == Some(&true)
    }

    /// Coordinates of the `n`-th empty cell in row-major order
    pub fn position(&self, n: usize) -> Option<(usize, usize)> {
        self.bits
            .iter_ones()
            .nth(n)
            .map(|index| (index / self.size, index % self.size))
    }

    /// Coordinates of all empty cells in row-major order
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.bits
            .iter_ones()
            .map(|index| (index / self.size, index % self.size))
            .collect()
    }
}

impl fmt::Display for EmptyCells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmptyCells({} cells: {:?})",
            self.count(),
            self.positions()
        )
    }
}
