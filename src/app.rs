use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/activities", post(handlers::save_activity))
        .route("/api/activities/:id/select", post(handlers::select_activity))
        .route("/api/activities/:id", delete(handlers::delete_activity))
        .route("/api/restart", post(handlers::restart))
        .with_state(state)
}
