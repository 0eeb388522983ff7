//! In-memory connection provider for tests
//!
//! Replays queued query outcomes in order and counts acquisitions,
//! executed statements and releases.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::error::DbError;
use super::provider::{Connection, ConnectionProvider};
use super::query::SqlQuery;
use crate::models::Record;

#[derive(Default)]
struct Shared {
    acquire_error: Mutex<Option<DbError>>,
    outcomes: Mutex<VecDeque<Result<Vec<Record>, DbError>>>,
    executed: Mutex<Vec<SqlQuery>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Scripted provider; clones share the same script and counters.
#[derive(Clone, Default)]
pub(crate) struct ScriptedProvider {
    shared: Arc<Shared>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every acquisition fail with `error`.
    pub fn failing_acquire(error: DbError) -> Self {
        let provider = Self::new();
        *provider.shared.acquire_error.lock().unwrap() = Some(error);
        provider
    }

    /// Queue rows for the next statement.
    pub fn rows(self, rows: Vec<Value>) -> Self {
        let records = rows
            .into_iter()
            .map(|row| match row {
                Value::Object(map) => map,
                other => panic!("scripted row must be an object, got {other}"),
            })
            .collect();
        self.push(Ok(records))
    }

    /// Queue a failure for the next statement.
    pub fn error(self, error: DbError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<Vec<Record>, DbError>) -> Self {
        self.shared.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn acquired(&self) -> usize {
        self.shared.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.shared.released.load(Ordering::SeqCst)
    }

    /// Statements run so far, in order.
    pub fn executed(&self) -> Vec<SqlQuery> {
        self.shared.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnectionProvider for ScriptedProvider {
    async fn acquire(&self) -> Result<Box<dyn Connection>, DbError> {
        if let Some(error) = self.shared.acquire_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.shared.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedConnection {
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct ScriptedConnection {
    shared: Arc<Shared>,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn fetch_all(&mut self, query: &SqlQuery) -> Result<Vec<Record>, DbError> {
        self.shared.executed.lock().unwrap().push(query.clone());
        self.shared
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DbError::query("no scripted result")))
    }
}

impl Drop for ScriptedConnection {
    fn drop(&mut self) {
        self.shared.released.fetch_add(1, Ordering::SeqCst);
    }
}
