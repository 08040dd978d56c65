//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use drunksched_core::event::{EventDraft, parse_date};
use drunksched_core::ics::generate_ics;
use drunksched_core::scoring::Scoreboard;
use drunksched_core::store::ListFilter;
use drunksched_core::Event;
use serde::Deserialize;

use crate::routes::{AppError, JsonBody};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route(
            "/api/events/{id}/final-date",
            put(confirm_date).delete(unconfirm_date),
        )
        .route("/api/events/{id}/scores", get(scores))
        .route("/api/events/{id}/calendar.ics", get(export_ics))
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: ListFilter,
}

/// GET /api/events - Events worth showing, in display order
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store().list(query.filter)?))
}

/// POST /api/events - Create an event
async fn create_event(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<EventDraft>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = state.store().create(draft)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events/:id
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store().get(&id)?))
}

/// PUT /api/events/:id - Edit name, dates, description and welcome flag
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<EventDraft>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store().update(&id, draft)?))
}

/// DELETE /api/events/:id
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store().delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Request body for confirming a date
#[derive(Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub date: String,
}

/// PUT /api/events/:id/final-date - Confirm the date
async fn confirm_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ConfirmRequest>,
) -> Result<Json<Event>, AppError> {
    let date = parse_date(&req.date)?;
    Ok(Json(state.store().confirm_date(&id, date)?))
}

/// DELETE /api/events/:id/final-date - Back to negotiating
async fn unconfirm_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(state.store().unconfirm_date(&id)?))
}

/// GET /api/events/:id/scores - Per-date scores and the best dates
async fn scores(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Scoreboard>, AppError> {
    Ok(Json(state.store().get(&id)?.scoreboard()))
}

/// GET /api/events/:id/calendar.ics
async fn export_ics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.store().get(&id)?;
    let ics = generate_ics(&event)?;
    Ok(([(header::CONTENT_TYPE, "text/calendar; charset=utf-8")], ics))
}
