use std::sync::Arc;

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::store::{Database, Store};
use crate::{assistant, event, message, task};

/// JSON error payload returned by all API endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

/// OpenAPI document covering the JSON API surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        get_data_handler,
        message::api::create_message_handler,
        event::api::create_event_handler,
        task::api::create_task_handler,
        task::api::toggle_task_handler,
        assistant::api::ask_handler,
    ),
    tags(
        (name = "Data", description = "Bulk read of the full database"),
        (name = "Messages", description = "Channel messages"),
        (name = "Events", description = "Calendar events"),
        (name = "Tasks", description = "Team tasks"),
        (name = "Assistant", description = "Canned keyword-matching assistant")
    )
)]
pub struct ApiDoc;

/// Handler for GET /api/data - Returns the entire database in JSON format.
#[tracing::instrument(skip(store))]
#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "Full database contents", body = Database),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Data"
)]
pub async fn get_data_handler(
    State(store): State<Arc<Store>>,
) -> Result<Json<Database>, (StatusCode, Json<ErrorResponse>)> {
    match store.load().await {
        Ok(db) => Ok(Json(db)),
        Err(err) => {
            tracing::error!("Failed to load database: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to load data".to_string())),
            ))
        }
    }
}

/// Creates the API routes for JSON API endpoints, nested under `/api`.
pub fn create_api_router(store: Arc<Store>) -> Router {
    let api_routes = Router::new()
        .route("/data", get(get_data_handler))
        .with_state(store.clone())
        .merge(message::api::create_api_router(store.clone()))
        .merge(event::api::create_api_router(store.clone()))
        .merge(task::api::create_api_router(store))
        .merge(assistant::api::create_api_router());
    Router::new().nest("/api", api_routes)
}
