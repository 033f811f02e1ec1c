use std::sync::Arc;

use crate::application::services::PlayerService;
use crate::infrastructure::cache::CacheStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub player_service: Arc<PlayerService>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn new(player_service: Arc<PlayerService>) -> Self {
        let cache = player_service.cache().store().clone();
        Self {
            player_service,
            cache,
        }
    }
}
