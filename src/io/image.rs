//! PNG export of boards with value-keyed tile colours

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_GAP_PIXELS, CELL_PIXELS, EMPTY_CELL_COLOR, TILE_COLORS,
};
use crate::io::error::{GameError, Result};
use crate::spatial::Grid;

/// Colour for a cell value
///
/// Values beyond the colour table reuse its last entry.
pub fn tile_color(value: u32) -> [u8; 4] {
    if value == 0 {
        return EMPTY_CELL_COLOR;
    }
    let index = value.trailing_zeros().saturating_sub(1) as usize;
    TILE_COLORS
        .get(index)
        .or_else(|| TILE_COLORS.last())
        .copied()
        .unwrap_or(EMPTY_CELL_COLOR)
}

/// Draw the board as square cells separated by a background gap
pub fn render_grid(grid: &Grid) -> RgbaImage {
    let size = grid.size() as u32;
    let stride = CELL_PIXELS + CELL_GAP_PIXELS;
    let side = size * stride + CELL_GAP_PIXELS;

    let mut img: RgbaImage = ImageBuffer::from_pixel(side, side, Rgba(BACKGROUND_COLOR));

    for ((row, col), &value) in grid.cells().indexed_iter() {
        let color = Rgba(tile_color(value));
        let left = CELL_GAP_PIXELS + col as u32 * stride;
        let top = CELL_GAP_PIXELS + row as u32 * stride;

        for y in top..top + CELL_PIXELS {
            for x in left..left + CELL_PIXELS {
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

/// Render the board and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_grid(grid)
        .save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
