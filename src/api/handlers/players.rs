use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::ApiError;
use crate::domain::{HistoryTarget, PlayerRecord, ResolvedPlayer};

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<Json<ResolvedPlayer>, ApiError> {
    let resolved = state.lookup.player(&query)?;
    Ok(Json(resolved))
}

pub async fn get_players(State(state): State<Arc<AppState>>) -> Json<Vec<PlayerRecord>> {
    let directory = state.lookup.directory().current();
    Json(directory.records().to_vec())
}

pub async fn get_history_target(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<Json<HistoryTarget>, ApiError> {
    let target = state.lookup.history(&query)?;
    Ok(Json(target))
}
