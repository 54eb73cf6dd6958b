//! Random tile placement after a move

use rand::Rng;

use crate::io::configuration::DEFAULT_FOUR_PROBABILITY;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Grid;

/// Odds of the tile values a spawn can produce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDistribution {
    four_probability: f64,
}

impl Default for SpawnDistribution {
    fn default() -> Self {
        Self {
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

impl SpawnDistribution {
    /// Distribution yielding a 4 with `four_probability`, otherwise a 2
    ///
    /// # Errors
    ///
    /// Returns an error if the probability lies outside `[0, 1]` or is NaN
    pub fn new(four_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(invalid_parameter(
                "four_probability",
                &four_probability,
                &"must be between 0 and 1",
            ));
        }
        Ok(Self { four_probability })
    }

    /// Probability that a spawned tile is a 4
    pub const fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Draw a tile value
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if rng.random_bool(self.four_probability) {
            4
        } else {
            2
        }
    }
}

/// Tile placed by a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    /// Row of the new tile
    pub row: usize,
    /// Column of the new tile
    pub col: usize,
    /// Value placed (2 or 4)
    pub value: u32,
}

/// Place one 2 or 4 in a uniformly chosen empty cell
///
/// Updates `grid` in place. A full grid is left untouched and `None` is
/// returned.
pub fn spawn_random_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    distribution: &SpawnDistribution,
    rng: &mut R,
) -> Option<SpawnedTile> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty.position(rng.random_range(0..empty.count()))?;
    let value = distribution.sample(rng);

    grid.set(row, col, value).then_some(SpawnedTile { row, col, value })
}
