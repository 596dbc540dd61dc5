use crate::error::{AppError, Result};
use crate::models::Server;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{json, Value};

/// Parses the trailing id segment of a by-id route.
///
/// Accepts an optional leading sign; anything else that is not a base-10
/// integer is rejected.
pub fn parse_server_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!("Rejected server id segment {:?}", raw);
        AppError::InvalidServerId
    })
}

/// Resolves the id capture of a by-id route.
///
/// A capture axum cannot decode (e.g. invalid UTF-8 after percent-decoding)
/// is reported the same way as a non-integer one.
pub fn server_id(path: std::result::Result<Path<String>, PathRejection>) -> Result<i64> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!("Rejected server id path: {}", e);
        AppError::InvalidServerId
    })?;
    parse_server_id(&raw)
}

fn read_body(body: std::result::Result<Bytes, BytesRejection>) -> Result<Bytes> {
    body.map_err(|e| {
        tracing::warn!("Failed to read request body: {}", e);
        AppError::InvalidBody
    })
}

/// POST /inputServerData
pub async fn input_server_data(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Server>> {
    let body = read_body(body)?;
    let server = state.server_service.create_server(&body).await?;
    Ok(Json(server))
}

/// GET /getAllServerData
pub async fn get_all_server_data(State(state): State<AppState>) -> Result<Json<Vec<Server>>> {
    let servers = state.server_service.list_servers().await?;
    Ok(Json(servers))
}

/// GET /getServerByID/{id}
pub async fn get_server_by_id(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Server>> {
    let id = server_id(id)?;
    let server = state.server_service.get_server(id).await?;
    Ok(Json(server))
}

/// PUT /updateServerByID/{id}
pub async fn update_server_by_id(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Server>> {
    let id = server_id(id)?;
    let body = read_body(body)?;
    let server = state.server_service.update_server(id, &body).await?;
    Ok(Json(server))
}

/// DELETE /deleteServerByID/{id}
pub async fn delete_server_by_id(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Value>> {
    let id = server_id(id)?;
    state.server_service.delete_server(id).await?;
    Ok(Json(json!({ "message": "Server deleted successfully" })))
}

/// By-id route hit with nothing after the trailing slash
pub async fn missing_server_id() -> AppError {
    AppError::InvalidServerId
}

/// Fallback for a known path reached with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
