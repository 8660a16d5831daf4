use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use lyricsync_application::SyncLyricsUseCase;

pub mod error;
pub mod handlers;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn SyncLyricsUseCase>,
}

impl AppState {
    pub fn new(usecase: Arc<dyn SyncLyricsUseCase>) -> Self {
        Self { usecase }
    }
}

pub fn create_app_routes(state: AppState) -> Router {
    // Uploads are full songs; raise the multipart body limit.
    let sync_route = post(sync_lyrics).layer(DefaultBodyLimit::max(64 * 1024 * 1024));

    Router::new()
        .route("/health", get(health_check))
        .route("/sync", sync_route)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
