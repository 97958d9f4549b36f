//! Runs synchronous database work off the async runtime.

use tokio::task::spawn_blocking;

use crate::error::ServiceError;

/// Runs a blocking closure and flattens join failures into [`ServiceError`].
pub(crate) async fn run_blocking<T, E, F>(f: F) -> Result<Result<T, E>, ServiceError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    spawn_blocking(f).await.map_err(|e| {
        tracing::error!("Join error: {}", e);
        ServiceError::Blocking(e.to_string())
    })
}
