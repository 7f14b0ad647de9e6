use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_refresh,
    matches::post_match,
    players::{get_history_target, get_player, get_players},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/elo/:query", get(get_player))
        .route("/players", get(get_players))
        .route("/history/:query", get(get_history_target))
        .route("/match", post(post_match))
        .route("/admin/refresh", post(admin_refresh))
        .with_state(state)
}
