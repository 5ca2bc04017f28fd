// This file is part of the product KvWiki.
// SPDX-FileCopyrightText: 2026 KvWiki Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use redis::AsyncCommands;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// The key has no value in the backend. This is the normal outcome for
    /// a page that was never saved, not a transport failure.
    Missing,
    /// The backend could not be reached or answered with a protocol error.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Missing => write!(f, "key not present in backend"),
            StoreError::Unavailable(msg) => write!(f, "backend unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Minimal surface of the key-value backend: get, set, enumerate keys.
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;
}

/// Redis-backed store. The connection manager multiplexes and reconnects
/// internally, so one clone-per-call is all the concurrency handling needed
/// here.
pub struct RedisStore {
    connection: redis::aio::ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let connection = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl PageStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        value.ok_or(StoreError::Missing)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection.clone();
        conn.keys(pattern)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

/// In-memory store used by the test suites in place of a live Redis. An
/// outage can be injected with `set_unavailable`, and `op_count` exposes how
/// many store operations were attempted so tests can assert the backend was
/// never touched.
#[derive(Default)]
pub struct MemoryStore {
    state: std::sync::Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    entries: std::collections::HashMap<String, Vec<u8>>,
    outage: Option<String>,
    op_count: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with the given message.
    pub fn set_unavailable(&self, message: &str) {
        let mut state = self.state.lock().expect("memory store lock");
        state.outage = Some(message.to_string());
    }

    pub fn op_count(&self) -> u64 {
        self.state.lock().expect("memory store lock").op_count
    }

    fn check(state: &mut MemoryState) -> Result<(), StoreError> {
        state.op_count += 1;
        match &state.outage {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let mut state = self.state.lock().expect("memory store lock");
        Self::check(&mut state)?;
        state.entries.get(key).cloned().ok_or(StoreError::Missing)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("memory store lock");
        Self::check(&mut state)?;
        state.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut state = self.state.lock().expect("memory store lock");
        Self::check(&mut state)?;
        Ok(state.entries.keys().cloned().collect())
    }
}
