use std::sync::Arc;

use sqlx::SqlitePool;

use crate::candidates::CandidateService;
use crate::config::{Config, repository::SqliteCandidateStore};

#[derive(Clone)]
pub struct AppState {
    pub candidates: CandidateService,
    pub db_pool: SqlitePool,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &Config, pool: SqlitePool) -> Self {
        let store = SqliteCandidateStore::new(pool.clone());
        AppState {
            candidates: CandidateService::new(Arc::new(store)),
            db_pool: pool,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
