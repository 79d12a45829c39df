//! Best-score persistence
//!
//! The only thing that outlives a session is one number: the best distance.
//! Backends:
//! - `MemoryStore`: in-process (tests, throwaway runs)
//! - `FileStore`: JSON file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::error::Result;

/// LocalStorage key, also the JSON field name on disk
pub const BEST_SCORE_KEY: &str = "poopGameBestScore";

/// Storage collaborator for the best distance (metres)
pub trait ScoreStore {
    /// Stored best, or 0 if nothing was saved yet
    fn load_best(&self) -> Result<u32>;
    fn save_best(&mut self, best: u32) -> Result<()>;
}

/// Keeps the best score in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<u32> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u32) -> Result<()> {
        self.best = best;
        Ok(())
    }
}
