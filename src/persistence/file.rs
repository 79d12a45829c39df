//! JSON file backend for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScoreStore;
use crate::error::Result;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveFile {
    #[serde(rename = "poopGameBestScore", default)]
    best_distance: u32,
}

/// Stores the best score in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load_best(&self) -> Result<u32> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let save: SaveFile = serde_json::from_str(&json)?;
        Ok(save.best_distance)
    }

    fn save_best(&mut self, best: u32) -> Result<()> {
        let json = serde_json::to_string_pretty(&SaveFile {
            best_distance: best,
        })?;
        // Write-then-rename: the save file is never half-written
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
