use crate::error::{AppError, Result};
use crate::models::{Server, ServerPayload};
use crate::repositories::ServerRepository;
use std::sync::Arc;

/// Registry operations as seen by the HTTP layer
///
/// Decodes request bodies, delegates to the repository and converts its
/// errors into [`AppError`]. A body that fails to decode never reaches the
/// repository, so a rejected request leaves the registry untouched.
#[derive(Clone)]
pub struct ServerService {
    repository: Arc<dyn ServerRepository>,
}

impl ServerService {
    pub fn new(repository: Arc<dyn ServerRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_server(&self, body: &[u8]) -> Result<Server> {
        let payload = ServerPayload::from_json(body).map_err(|e| {
            tracing::warn!("Rejected server create: {}", e);
            AppError::InvalidJson
        })?;

        let server = self.repository.create(payload).await?;
        tracing::info!("Created server {} ({})", server.id, server.host_name);

        Ok(server)
    }

    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        let servers = self.repository.list_all().await?;
        tracing::debug!("Listing {} servers", servers.len());
        Ok(servers)
    }

    pub async fn get_server(&self, id: i64) -> Result<Server> {
        tracing::debug!("Looking up server {}", id);
        self.repository.get_by_id(id).await.map_err(|e| {
            tracing::warn!("{}", e);
            e.into()
        })
    }

    /// Replaces host name, address and status of an existing server.
    ///
    /// An unknown id wins over a malformed body: both together report
    /// [`AppError::ServerNotFound`].
    pub async fn update_server(&self, id: i64, body: &[u8]) -> Result<Server> {
        let payload = match ServerPayload::from_json(body) {
            Ok(payload) => payload,
            Err(e) => {
                self.get_server(id).await?;
                tracing::warn!("Rejected update of server {}: {}", id, e);
                return Err(AppError::InvalidJson);
            }
        };

        let server = self
            .repository
            .update_by_id(id, payload)
            .await
            .map_err(|e| {
                tracing::warn!("{}", e);
                AppError::from(e)
            })?;
        tracing::info!("Updated server {}", id);

        Ok(server)
    }

    pub async fn delete_server(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await.map_err(|e| {
            tracing::warn!("{}", e);
            AppError::from(e)
        })?;
        tracing::info!("Deleted server {}", id);
        Ok(())
    }
}
