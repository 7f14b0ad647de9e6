use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{ErrorBody, RefreshResponse};
use crate::domain::PlayerDirectory;

/// Reloads the stored snapshot and swaps it in for new requests
pub async fn admin_refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    log::info!("Admin triggered snapshot refresh");

    match load_stored(Arc::clone(&state)).await {
        Ok(directory) => {
            let players = directory.len();
            state.lookup.directory().replace(directory);
            log::info!("Snapshot refresh completed with {} players", players);
            (StatusCode::ACCEPTED, Json(RefreshResponse { players })).into_response()
        }
        Err(e) => {
            log::error!("Snapshot refresh failed: {:?}", e);
            let body = ErrorBody {
                error: format!("{:#}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

// File read and JSON parse stay off the async workers
async fn load_stored(state: Arc<AppState>) -> Result<PlayerDirectory> {
    tokio::task::spawn_blocking(move || {
        state.store.load_directory(state.config.storage.snapshot_key)
    })
    .await?
}
