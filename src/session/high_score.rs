//! High score persistence across sessions

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::error::{GameError, Result};

/// Somewhere a single best score can be kept between games
pub trait HighScoreStore {
    /// Read the stored score (0 if nothing was stored yet)
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    fn load(&self) -> Result<u64>;

    /// Overwrite the stored score
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn save(&mut self, score: u64) -> Result<()>;

    /// Save `score` only if it beats the stored one, returning whether it did
    ///
    /// # Errors
    ///
    /// Propagates load and save failures
    fn record(&mut self, score: u64) -> Result<bool> {
        if score > self.load()? {
            self.save(score)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// High score kept as a decimal integer in a text file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    /// Store backed by the file at `path` (created on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the score
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u64> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(GameError::FileSystem {
                    path: self.path.clone(),
                    operation: "read high score",
                    source: e,
                });
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }

        trimmed
            .parse::<u64>()
            .map_err(|e| GameError::HighScoreFormat {
                path: self.path.clone(),
                content: trimmed.to_string(),
                source: e,
            })
    }

    fn save(&mut self, score: u64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        fs::write(&self.path, format!("{score}\n")).map_err(|e| GameError::FileSystem {
            path: self.path.clone(),
            operation: "write high score",
            source: e,
        })
    }
}

/// High score that lives only as long as the process
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScoreStore {
    score: u64,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u64> {
        Ok(self.score)
    }

    fn save(&mut self, score: u64) -> Result<()> {
        self.score = score;
        Ok(())
    }
}
