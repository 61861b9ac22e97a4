use crate::errors::AppError;
use crate::models::{Activity, SaveActivityRequest, StateResponse, Summary, TrackerState};
use crate::reducer::{Action, reduce};
use crate::state::AppState;
use crate::storage::persist_activities;
use crate::summary::build_summary;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(&build_summary(&tracker.activities)))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    Ok(Json(to_response(&tracker)))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    let tracker = state.tracker.lock().await;
    Ok(Json(build_summary(&tracker.activities)))
}

pub async fn save_activity(
    State(state): State<AppState>,
    Json(payload): Json<SaveActivityRequest>,
) -> Result<Json<StateResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if payload.calories == 0 {
        return Err(AppError::bad_request("calories must be greater than zero"));
    }

    let activity = Activity {
        id: payload.id,
        category: payload.category,
        name: payload.name,
        calories: payload.calories,
    };
    let action = Action::SaveActivity {
        activity,
        assigned_id: Uuid::new_v4().to_string(),
    };

    dispatch(&state, action).await
}

pub async fn select_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StateResponse>, AppError> {
    dispatch(&state, Action::SetActiveId { id }).await
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StateResponse>, AppError> {
    dispatch(&state, Action::DeleteActivity { id }).await
}

pub async fn restart(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    dispatch(&state, Action::RestartApp).await
}

async fn dispatch(state: &AppState, action: Action) -> Result<Json<StateResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let next = reduce(&tracker, action);
    persist_activities(&state.data_path, &next.activities).await?;
    *tracker = next;

    Ok(Json(to_response(&tracker)))
}

fn to_response(tracker: &TrackerState) -> StateResponse {
    StateResponse {
        summary: build_summary(&tracker.activities),
        activities: tracker.activities.clone(),
        active_id: tracker.active_id.clone(),
    }
}
