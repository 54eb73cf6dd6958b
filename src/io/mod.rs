//! Input/output, configuration and error handling
//!
//! This module contains everything between the engine and the outside world:
//! - Error types and constants
//! - Board files and PNG export
//! - The command-line runner and its progress display

/// Plain text board files
pub mod board_file;
/// Command-line interface for automated play
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of boards
pub mod image;
/// Progress bars for batches of games
pub mod progress;
