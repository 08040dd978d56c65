//! Participant response endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use drunksched_core::{Attendance, Event, SchedError};
use serde::Deserialize;

use crate::routes::{AppError, JsonBody};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events/{id}/responses", post(submit_response))
        .route("/api/events/{id}/responses/{name}", delete(delete_response))
}

/// Request body for submitting attendance
#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,
    pub attendance: Option<Attendance>,
}

/// POST /api/events/:id/responses - Add or replace a participant's response
async fn submit_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<SubmitRequest>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let attendance = req
        .attendance
        .ok_or_else(|| SchedError::validation("attendance is required"))?;

    let event = state.store().submit_response(&id, &req.name, attendance)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// DELETE /api/events/:id/responses/:name
async fn delete_response(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store().delete_response(&id, &name)?))
}
