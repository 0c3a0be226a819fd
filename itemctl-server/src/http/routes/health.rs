//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{DbError, ItemRepo};
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

impl HealthResponse {
    fn up() -> Self {
        Self {
            status: "ok".into(),
            database: "up".into(),
        }
    }

    fn down() -> Self {
        Self {
            status: "degraded".into(),
            database: "down".into(),
        }
    }
}

/// GET /health
///
/// Store failures stop here: they become a 503, never an error response.
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match ping(&state).await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::down()))
        }
    }
}

async fn ping(state: &AppState) -> Result<(), DbError> {
    let mut conn = state.session().await?;
    ItemRepo::new(&mut conn).ping().await
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn health_returns_ok() {
        let pool = create_memory_pool().await.unwrap();
        let (status, Json(body)) = health(State(Arc::new(AppState::new(pool)))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, HealthResponse::up());
    }

    #[tokio::test]
    async fn health_degrades_when_pool_closed() {
        let pool = create_memory_pool().await.unwrap();
        pool.close().await;
        let (status, Json(body)) = health(State(Arc::new(AppState::new(pool)))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "down");
    }
}
