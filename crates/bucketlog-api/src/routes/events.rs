//! Routes for recording and reading events.
//!
//! Every handler validates the `event_bucket` path segment before doing
//! anything else, so a malformed bucket never reaches storage.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{Span, field, info, instrument};
use uuid::Uuid;

use bucketlog_core::bucket::BucketId;
use bucketlog_events::application::query_handlers::{BucketEventsView, EventView};
use bucketlog_events::application::{command_handlers, query_handlers};
use bucketlog_events::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for PUT /{event_bucket}/.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Event body.
    pub message: String,
}

/// Response body returned after an event is recorded.
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    /// Server-assigned id of the new event.
    pub event_id: Uuid,
}

/// PUT /{event_bucket}/
#[instrument(skip_all, fields(bucket_id = field::Empty))]
async fn create_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, ApiError> {
    let Path(event_bucket) = path?;
    let bucket_id = BucketId::parse(&event_bucket)?;
    Span::current().record("bucket_id", bucket_id.as_str());
    let Json(request) = payload?;
    let command = commands::CreateEvent::new(bucket_id, request.title, request.message)?;

    let event_id = command_handlers::handle_create_event(
        &command,
        state.ids.as_ref(),
        state.sessions.as_ref(),
    )
    .await?;

    info!(%event_id, "event created");

    Ok(Json(CreateEventResponse { event_id }))
}

/// GET /{event_bucket}/
#[instrument(skip_all, fields(bucket_id = field::Empty))]
async fn list_event_ids(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BucketEventsView>, ApiError> {
    let Path(event_bucket) = path?;
    let bucket_id = BucketId::parse(&event_bucket)?;
    Span::current().record("bucket_id", bucket_id.as_str());
    let view = query_handlers::list_event_ids(&bucket_id, state.sessions.as_ref()).await?;
    Ok(Json(view))
}

/// GET /{event_bucket}/{event_id}
#[instrument(skip_all, fields(bucket_id = field::Empty, event_id = field::Empty))]
async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<EventView>, ApiError> {
    let Path((event_bucket, event_id)) = path?;
    let bucket_id = BucketId::parse(&event_bucket)?;
    Span::current()
        .record("bucket_id", bucket_id.as_str())
        .record("event_id", event_id.as_str());
    let view =
        query_handlers::get_event_by_id(&bucket_id, &event_id, state.sessions.as_ref()).await?;
    Ok(Json(view))
}

/// Returns the router for the event endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{event_bucket}/",
            get(list_event_ids).put(create_event),
        )
        .route("/{event_bucket}/{event_id}", get(get_event))
}
