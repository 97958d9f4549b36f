//! HTTP API server for sqlchat.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod handlers;


use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use sqlchat_service::ChatSession;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use api_types::{AskRequest, SchemaResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// The session sits behind a mutex so that a second question waits for
/// the first turn to finish instead of interleaving with it.
pub struct AppState {
    pub session: Mutex<ChatSession>,
}

impl AppState {
    #[must_use]
    pub fn new(session: ChatSession) -> Self {
        Self { session: Mutex::new(session) }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/schema", get(handlers::get_schema))
        .route("/api/history", get(handlers::get_history))
        .route("/api/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
