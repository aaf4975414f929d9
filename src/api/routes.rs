//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name                  | Description                            | Return Type         |
// |-----------------------|----------------------------------------|---------------------|
// | health                | Health check endpoint                  | Response            |
// | get_event             | Fetch one event by slug                | ApiResult<Response> |
// | get_similar_events    | Related events sharing a tag           | ApiResult<Response> |
// | create_booking        | Record a booking request               | ApiResult<Response> |
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bson::oid::ObjectId;
use tracing::{error, warn};

use super::{
    ApiError, ApiResult, AppState, BookingResponse, CreateBookingRequest, EventResponse,
    SimilarEventsResponse,
};
use crate::domain::models::Booking;

/// Slugs longer than this are rejected outright.
const MAX_SLUG_LEN: usize = 200;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Lowercases the raw path segment and strips anything that is not
/// alphanumeric or a hyphen. The stores expect slugs already in this form;
/// `None` means the input had nothing usable left (or was oversized).
fn normalize_slug(raw: &str) -> Option<String> {
    let slug: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        None
    } else {
        Some(slug)
    }
}

/// Fetch one event by slug
pub async fn get_event(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    // Reject malformed slugs before touching the database
    let slug = normalize_slug(&slug)
        .ok_or_else(|| ApiError::BadRequest("Invalid slug format".to_string()))?;

    let event = state
        .events
        .find_by_slug(&slug)
        .await
        .map_err(|err| ApiError::internal("Failed to fetch event", err))?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let response = EventResponse {
        message: "Event retrieved successfully".to_string(),
        event,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Related events sharing at least one tag with the event at `slug`.
///
/// Store failures are folded to an empty list here, at the page-assembly
/// boundary: the listing page renders without its similar-events rail rather
/// than erroring.
pub async fn get_similar_events(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    let slug = normalize_slug(&slug)
        .ok_or_else(|| ApiError::BadRequest("Invalid slug format".to_string()))?;

    let events = match state.events.find_similar_by_slug(&slug).await {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, %slug, "similar events lookup failed");
            Vec::new()
        }
    };

    Ok((StatusCode::OK, Json(SimilarEventsResponse { events })).into_response())
}

/// Record a booking request
pub async fn create_booking(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<Response> {
    // An identifier that does not parse is indistinguishable from any other
    // write failure for the caller: success stays false either way.
    let outcome = match ObjectId::parse_str(&req.event_id) {
        Ok(event_id) => {
            state
                .bookings
                .create(Booking::new(event_id, req.slug, req.email))
                .await
        }
        Err(err) => {
            error!(error = %err, event_id = %req.event_id, "booking rejected: bad event id");
            return Ok((StatusCode::OK, Json(BookingResponse::failure())).into_response());
        }
    };

    match outcome {
        Ok(()) => Ok((StatusCode::CREATED, Json(BookingResponse::success())).into_response()),
        Err(err) => {
            error!(error = %err, "failed to create booking");
            Ok((StatusCode::OK, Json(BookingResponse::failure())).into_response())
        }
    }
}
