//! Level persistence - a single file holding one positive integer
//!
//! Absence or corruption of the file is recovered locally by falling back
//! to level 1; it is never an error the rest of the game has to handle.

use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Loads and saves the progression level
#[derive(Debug, Clone)]
pub struct LevelStore {
    path: PathBuf,
}

impl LevelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored level, defaulting to 1 on any problem
    pub fn load(&self) -> u32 {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "no level file, starting at level 1");
                return 1;
            }
        };

        match content.trim().parse::<u32>() {
            Ok(level) if level >= 1 => level,
            _ => {
                tracing::warn!(path = %self.path.display(), "corrupt level file, starting at level 1");
                1
            }
        }
    }

    /// Write the level back out
    pub fn save(&self, level: u32) -> Result<()> {
        std::fs::write(&self.path, format!("{level}\n"))?;
        Ok(())
    }
}
