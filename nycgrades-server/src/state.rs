//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{ConnectionProvider, PgProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    provider: Box<dyn ConnectionProvider>,
}

impl AppState {
    pub fn new(provider: impl ConnectionProvider + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                provider: Box::new(provider),
            }),
        }
    }

    /// State backed by a Postgres pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(PgProvider::new(pool))
    }

    pub fn provider(&self) -> &dyn ConnectionProvider {
        self.inner.provider.as_ref()
    }
}
