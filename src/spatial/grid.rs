//! Board value type backed by a fixed-size `ndarray` matrix
//!
//! A `Grid` is always `GRID_SIZE` x `GRID_SIZE` and every cell is either 0
//! (empty) or a power of two of at least 2. Raw data is validated when it
//! enters the crate, so engine operations never have to re-check it.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis};

use crate::io::configuration::GRID_SIZE;
use crate::io::error::{Result, invalid_grid};
use crate::spatial::cells::EmptyCells;

/// Square board of tile values (0 = empty cell)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Array2<u32>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create a board with every cell empty
    ///
    /// Each call allocates a fresh matrix; no two grids share storage.
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((GRID_SIZE, GRID_SIZE)),
        }
    }

    /// Build a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGrid` if any cell is neither 0 nor a power
    /// of two of at least 2
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        Self::from_array(Array2::from(rows.to_vec()))
    }

    /// Build a grid from an arbitrary matrix
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGrid` if the matrix is not
    /// `GRID_SIZE` x `GRID_SIZE` or holds a value that isn't a tile
    pub fn from_array(cells: Array2<u32>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != GRID_SIZE || cols != GRID_SIZE {
            return Err(invalid_grid(&format!(
                "expected {GRID_SIZE}x{GRID_SIZE} cells, found {rows}x{cols}"
            )));
        }

        for ((row, col), &value) in cells.indexed_iter() {
            if !is_cell_value(value) {
                return Err(invalid_grid(&format!(
                    "cell ({row}, {col}) holds {value}, which is not 0 or a power of two >= 2"
                )));
            }
        }

        Ok(Self {
            cells: cells.as_standard_layout().into_owned(),
        })
    }

    /// Wrap a matrix already known to hold valid cells
    fn from_trusted(cells: ArrayView2<'_, u32>) -> Self {
        Self {
            cells: cells.as_standard_layout().into_owned(),
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Read-only view of the underlying matrix
    pub fn cells(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    pub(crate) fn cells_mut(&mut self) -> ArrayViewMut2<'_, u32> {
        self.cells.view_mut()
    }

    /// Value at a position, `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get([row, col]).copied()
    }

    /// Place a tile value, returning false when the position is off the board
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = value;
            true
        } else {
            false
        }
    }

    /// True if at least one cell is empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|&value| value == 0)
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Mask of empty cells in row-major order
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells::from_grid(self)
    }

    /// Highest tile value on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Copy the cells out as nested row vectors
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

// Tile values are 2^k for k >= 1
const fn is_cell_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Create an empty board
pub fn empty_board() -> Grid {
    Grid::empty()
}

/// True if at least one cell of `grid` is empty
pub fn has_empty_cell(grid: &Grid) -> bool {
    grid.has_empty_cell()
}

/// Mirror every row left to right
pub fn reverse(grid: &Grid) -> Grid {
    let mut view = grid.cells.view();
    view.invert_axis(Axis(1));
    Grid::from_trusted(view)
}

/// Swap rows and columns (mirror across the main diagonal)
pub fn transpose(grid: &Grid) -> Grid {
    Grid::from_trusted(grid.cells.t())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let mut first = true;
            for &value in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = crate::io::error::GameError;

    /// Parse the text form written by `Display`
    ///
    /// Cells are whitespace separated integers or `.` for empty. Blank
    /// lines and lines starting with `#` are skipped.
    fn from_str(text: &str) -> Result<Self> {
        let mut values = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        let mut rows = 0;

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut cols = 0;
            for token in line.split_whitespace() {
                let value = if token == "." {
                    0
                } else {
                    token.parse::<u32>().map_err(|e| {
                        invalid_grid(&format!("row {rows}: cannot read '{token}': {e}"))
                    })?
                };
                values.push(value);
                cols += 1;
            }

            if cols != GRID_SIZE {
                return Err(invalid_grid(&format!(
                    "row {rows} has {cols} cells, expected {GRID_SIZE}"
                )));
            }
            rows += 1;
        }

        if rows != GRID_SIZE {
            return Err(invalid_grid(&format!(
                "found {rows} rows, expected {GRID_SIZE}"
            )));
        }

        let cells = Array2::from_shape_vec((GRID_SIZE, GRID_SIZE), values)
            .map_err(|e| invalid_grid(&e))?;
        Self::from_array(cells)
    }
}
