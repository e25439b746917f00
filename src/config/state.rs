// Application state module
// Owns the configuration and both content catalogs for the process lifetime

use std::sync::atomic::AtomicBool;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::catalog::{seed, ArHintRecord, CatalogState, GifRecord};

use super::types::Config;

/// Application state
///
/// Both catalogs are seeded at construction; a process restart is the only
/// way back to the seed data. The catalogs sit behind `RwLock` so an append
/// is atomic with respect to concurrent readers.
pub struct AppState {
    pub config: Config,
    pub gifs: RwLock<CatalogState<GifRecord>>,
    pub ar_hints: RwLock<CatalogState<ArHintRecord>>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let now = Utc::now();
        let access_log = config.logging.access_log;

        Self {
            config,
            gifs: RwLock::new(CatalogState::new(seed::seed_gifs(), now)),
            ar_hints: RwLock::new(CatalogState::new(seed::seed_ar_hints(), now)),
            cached_access_log: AtomicBool::new(access_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::test_config;

    #[tokio::test]
    async fn test_new_state_is_seeded() {
        let state = AppState::new(test_config());
        assert_eq!(state.gifs.read().await.records().len(), 4);
        assert_eq!(state.ar_hints.read().await.records().len(), 4);
    }

    #[tokio::test]
    async fn test_catalogs_share_initial_watermark() {
        let state = AppState::new(test_config());
        let gifs = state.gifs.read().await.last_updated();
        let hints = state.ar_hints.read().await.last_updated();
        assert_eq!(gifs, hints);
    }
}
