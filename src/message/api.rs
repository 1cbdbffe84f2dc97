use crate::message::{Message, MessageService};
use crate::store::Store;
use crate::web::api::ErrorResponse;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::post};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request payload for creating a message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    /// Channel the message is posted to
    channel_id: Option<i64>,
    /// Message body
    text: Option<String>,
    /// Author of the message; defaults to user 1
    user_id: Option<i64>,
}

/// Handler for POST /api/messages - Creates a new message.
#[tracing::instrument(skip(store))]
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message created", body = Message),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Messages"
)]
pub async fn create_message_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<Json<Message>, (StatusCode, Json<ErrorResponse>)> {
    let Some(channel_id) = request.channel_id else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("channel_id is required".to_string())),
        ));
    };
    let Some(text) = request.text else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("text is required".to_string())),
        ));
    };

    let service = MessageService::new(&store);
    match service.create_message(channel_id, request.user_id, text).await {
        Ok(message) => Ok(Json(message)),
        Err(err) => {
            tracing::error!("Failed to create message: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create message".to_string())),
            ))
        }
    }
}

/// Creates and returns the messages API router.
pub fn create_api_router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/messages", post(create_message_handler))
        .with_state(store)
}
