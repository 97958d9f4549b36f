use std::sync::Arc;

use anyhow::Result;
use sqlchat_http::{create_router, AppState};

use super::GlobalArgs;

pub(crate) async fn run(global: &GlobalArgs, port: u16, host: String) -> Result<()> {
    let session = global.session().await?;
    let state = Arc::new(AppState::new(session));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
