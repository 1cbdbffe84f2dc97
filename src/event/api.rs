use crate::event::{Event, EventService};
use crate::store::Store;
use crate::web::api::ErrorResponse;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::post};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request payload for creating a calendar event.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Event title
    title: Option<String>,
    /// Start time
    start: Option<String>,
    /// End time
    end: Option<String>,
    /// Free-form description; defaults to an empty string
    description: Option<String>,
    /// Organizing user; defaults to user 1
    organizer: Option<i64>,
    /// Invited users; defaults to users 1 and 2
    attendees: Option<Vec<i64>>,
}

/// Handler for POST /api/events - Creates a new calendar event.
#[tracing::instrument(skip(store))]
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event created", body = Event),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Events"
)]
pub async fn create_event_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<Event>, (StatusCode, Json<ErrorResponse>)> {
    let Some(title) = request.title else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("title is required".to_string())),
        ));
    };
    let Some(start) = request.start else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("start is required".to_string())),
        ));
    };
    let Some(end) = request.end else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("end is required".to_string())),
        ));
    };

    let service = EventService::new(&store);
    match service
        .create_event(
            title,
            start,
            end,
            request.description,
            request.organizer,
            request.attendees,
        )
        .await
    {
        Ok(event) => Ok(Json(event)),
        Err(err) => {
            tracing::error!("Failed to create event: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create event".to_string())),
            ))
        }
    }
}

/// Creates and returns the events API router.
pub fn create_api_router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/events", post(create_event_handler))
        .with_state(store)
}
