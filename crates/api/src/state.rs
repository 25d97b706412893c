use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{CategoryService, FlashcardService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flashcards_db::DbPool,
    /// Server configuration (admin credential, static dir, ...).
    pub config: Arc<ServerConfig>,
    pub categories: CategoryService,
    pub flashcards: FlashcardService,
}

impl AppState {
    /// Wire every service onto the one pool. Called once at startup.
    pub fn new(pool: flashcards_db::DbPool, config: ServerConfig) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            flashcards: FlashcardService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
