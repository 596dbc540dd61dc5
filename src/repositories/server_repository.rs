//! In-memory server registry
//!
//! Holds the authoritative set of [`Server`] records for the process. Records
//! are keyed by id in a `BTreeMap`; ids only ever grow, so key order is also
//! insertion order.

use crate::models::{Server, ServerPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Server not found: {0}")]
    NotFound(i64),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerRepository: Send + Sync {
    async fn create(&self, payload: ServerPayload) -> RepositoryResult<Server>;
    async fn list_all(&self) -> RepositoryResult<Vec<Server>>;
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Server>;
    async fn update_by_id(&self, id: i64, payload: ServerPayload) -> RepositoryResult<Server>;
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}

struct Registry {
    servers: BTreeMap<i64, Server>,
    next_id: i64,
}

/// Lock-guarded registry of servers
///
/// The record map and the id counter sit behind a single `RwLock`, so every
/// operation is one atomic step: creates, updates and deletes hold the write
/// guard, lookups and listings share the read guard.
pub struct InMemoryServerRepository {
    inner: RwLock<Registry>,
}

impl InMemoryServerRepository {
    /// Creates an empty registry whose first id will be 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry {
                servers: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Id the next successful create will receive
    pub async fn next_id(&self) -> i64 {
        self.inner.read().await.next_id
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.servers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.servers.is_empty()
    }
}

impl Default for InMemoryServerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServerRepository for InMemoryServerRepository {
    async fn create(&self, payload: ServerPayload) -> RepositoryResult<Server> {
        let mut registry = self.inner.write().await;

        let id = registry.next_id;
        registry.next_id += 1;

        let server = payload.into_server(id);
        registry.servers.insert(id, server.clone());

        Ok(server)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Server>> {
        let registry = self.inner.read().await;
        Ok(registry.servers.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Server> {
        self.inner
            .read()
            .await
            .servers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update_by_id(&self, id: i64, payload: ServerPayload) -> RepositoryResult<Server> {
        let mut registry = self.inner.write().await;

        let server = registry
            .servers
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        server.apply(payload);

        Ok(server.clone())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.inner
            .write()
            .await
            .servers
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
