//! Error types for grid validation, persistence and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and session operations
#[derive(Debug)]
pub enum GameError {
    /// Grid data doesn't describe a well-formed board
    ///
    /// Raised at the boundary (construction from raw values, text parsing)
    /// so that engine operations only ever see:
    /// - exactly `GRID_SIZE` rows and columns
    /// - cells that are 0 or a power of two of at least 2
    InvalidGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Stored high score could not be read back as an integer
    HighScoreFormat {
        /// Path of the high score file
        path: PathBuf,
        /// Raw content found in the file
        content: String,
        /// Underlying integer parse error
        source: std::num::ParseIntError,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::HighScoreFormat { path, content, .. } => {
                write!(
                    f,
                    "High score file '{}' does not hold an integer: '{content}'",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HighScoreFormat { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, GameError>;

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> GameError {
    GameError::InvalidGrid {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
