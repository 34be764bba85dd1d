//! JSON API handlers for event listings.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use lexscopic_core::events::{group_into_sections, EventRecord, Sections, TagMeta, TAG_TABLE};
use lexscopic_core::storage::RepositoryError;

use crate::{
    handlers::AppError,
    models::{ListEventsQuery, SubmitEvent},
    state::AppState,
};

/// Visible records for the criteria in the query (GET /api/events).
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<Json<Vec<EventRecord>>, AppError> {
    let Query(query) = query?;
    let criteria = query.into_criteria(state.today())?;

    let visible = state.visible_events(&criteria).await?;
    tracing::debug!(count = visible.len(), criteria = ?criteria, "Listed events");

    Ok(Json(visible))
}

/// Visible records grouped for display (GET /api/events/sections).
pub async fn list_sections(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<Json<Sections>, AppError> {
    let Query(query) = query?;
    let criteria = query.into_criteria(state.today())?;

    let visible = state.visible_events(&criteria).await?;

    Ok(Json(group_into_sections(&visible)))
}

/// One record by id (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    let record = state
        .event_repo
        .get_event(&id)
        .await?
        .ok_or(RepositoryError::NotFound {
            entity_type: "Event",
            id,
        })?;

    Ok(Json(record))
}

/// Submit a new event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    form: Result<Form<SubmitEvent>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    tracing::debug!(payload = ?payload, "Received submit event request");

    let record = state.submit(payload.into_draft(state.today())).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// The tag lookup table (GET /api/tags).
pub async fn list_tags() -> Json<Vec<TagMeta>> {
    Json(TAG_TABLE.to_vec())
}
