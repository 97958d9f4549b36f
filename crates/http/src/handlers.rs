use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use sqlchat_core::{AssistantTurn, Turn};

use crate::api_error::ApiError;
use crate::api_types::{AskRequest, SchemaResponse};
use crate::AppState;

pub async fn get_schema(State(state): State<Arc<AppState>>) -> Json<SchemaResponse> {
    let session = state.session.lock().await;
    Json(SchemaResponse { schema: session.schema().as_str().to_owned() })
}

pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<Turn>> {
    let session = state.session.lock().await;
    Json(session.conversation().turns().to_vec())
}

/// Runs one conversation turn. Holds the session lock for the whole turn.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AssistantTurn>, ApiError> {
    let mut session = state.session.lock().await;
    let turn = session.ask(&req.question).await?;
    Ok(Json(turn))
}
