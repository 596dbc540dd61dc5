//! Route table for the inventory service
//!
//! Paths are part of the wire contract and are kept exactly as existing
//! clients call them.

use crate::handlers;
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub const INPUT_SERVER_DATA: &str = "/inputServerData";
pub const GET_ALL_SERVER_DATA: &str = "/getAllServerData";
pub const GET_SERVER_BY_ID: &str = "/getServerByID/{*id}";
pub const UPDATE_SERVER_BY_ID: &str = "/updateServerByID/{*id}";
pub const DELETE_SERVER_BY_ID: &str = "/deleteServerByID/{*id}";

/// Builds the application router with state and request tracing attached.
///
/// Every path answers a wrong method with 405 and a plain-text reason,
/// including HEAD on the GET paths. The by-id paths capture everything after
/// the prefix, so `/getServerByID/1/x` is a bad id rather than an unknown
/// route, and also match the bare prefix (`/getServerByID/`) for an empty id.
/// Request bodies are not size-limited.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            INPUT_SERVER_DATA,
            post(handlers::input_server_data).fallback(handlers::method_not_allowed),
        )
        .route(
            GET_ALL_SERVER_DATA,
            get(handlers::get_all_server_data)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            GET_SERVER_BY_ID,
            get(handlers::get_server_by_id)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/getServerByID/",
            get(handlers::missing_server_id)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            UPDATE_SERVER_BY_ID,
            put(handlers::update_server_by_id).fallback(handlers::method_not_allowed),
        )
        .route(
            "/updateServerByID/",
            put(handlers::missing_server_id).fallback(handlers::method_not_allowed),
        )
        .route(
            DELETE_SERVER_BY_ID,
            delete(handlers::delete_server_by_id).fallback(handlers::method_not_allowed),
        )
        .route(
            "/deleteServerByID/",
            delete(handlers::missing_server_id).fallback(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Formats a by-id path for a concrete id.
pub fn by_id_path(template: &str, id: i64) -> String {
    template.replace("{*id}", &id.to_string())
}
