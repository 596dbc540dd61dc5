pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use std::sync::Arc;

use repositories::{InMemoryServerRepository, ServerRepository};
use services::ServerService;

pub use routes::build_router;

#[derive(Clone)]
pub struct AppState {
    pub server_service: Arc<ServerService>,
}

impl AppState {
    /// State backed by the given repository.
    pub fn new(repository: Arc<dyn ServerRepository>) -> Self {
        Self {
            server_service: Arc::new(ServerService::new(repository)),
        }
    }

    /// State backed by a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryServerRepository::new()))
    }
}
