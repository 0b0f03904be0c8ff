//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

/// Defaults applied when the matching flag is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    /// Counts above this ask for confirmation before generating.
    pub confirm_threshold: usize,
}

impl Settings {
    /// `$MASSPASS_CONFIG`, else `~/.config/masspass/settings`.
    pub fn default_path() -> PathBuf {
        file::default_path()
    }

    pub fn save_to_file(&self) -> std::io::Result<()> {
        self.save_to(&file::default_path())
    }

    /// A missing file yields defaults.
    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 12,
            confirm_threshold: 10_000_000,
        }
    }
}
