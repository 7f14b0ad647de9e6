use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::ApiError;
use crate::domain::MatchRequest;
use crate::errors::LookupError;
use crate::services::MatchReport;

pub async fn post_match(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchReport>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::debug!("Rejected match body: {}", rejection.body_text());
        LookupError::MalformedRequest(rejection.body_text())
    })?;

    let report = state.lookup.compose_match(&request)?;
    Ok(Json(report))
}
