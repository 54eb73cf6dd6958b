//! Loading and saving boards in their plain text form

use std::fs;
use std::path::Path;

use crate::io::error::{GameError, Result};
use crate::spatial::Grid;

/// Read a board written in the `Grid` text form
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not a valid board (wrong shape or non-tile values)
pub fn load_board(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|e| GameError::FileSystem {
        path: path.to_path_buf(),
        operation: "read board",
        source: e,
    })?;

    text.parse::<Grid>().map_err(|error| match error {
        GameError::InvalidGrid { reason } => GameError::InvalidGrid {
            reason: format!("{}: {reason}", path.display()),
        },
        other => other,
    })
}

/// Write a board in the text form `load_board` reads back
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_board(grid: &Grid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, grid.to_string()).map_err(|e| GameError::FileSystem {
        path: path.to_path_buf(),
        operation: "write board",
        source: e,
    })
}
