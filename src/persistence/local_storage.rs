//! Browser LocalStorage backend

use super::{BEST_SCORE_KEY, ScoreStore};
use crate::error::{PlatformError, Result};

/// Best score as a decimal string under `poopGameBestScore`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PlatformError::Unavailable)
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<u32> {
        let storage = Self::storage()?;
        match storage.get_item(BEST_SCORE_KEY) {
            Ok(Some(value)) => value
                .trim()
                .parse()
                .map_err(|_| PlatformError::Corrupt(value)),
            Ok(None) => Ok(0),
            Err(e) => Err(PlatformError::Backend(format!("getItem: {:?}", e))),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<()> {
        let storage = Self::storage()?;
        storage
            .set_item(BEST_SCORE_KEY, &best.to_string())
            .map_err(|e| PlatformError::Backend(format!("setItem: {:?}", e)))
    }
}
