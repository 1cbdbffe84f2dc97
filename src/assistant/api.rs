use axum::{Router, response::Json, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::assistant::classify;

/// Request payload for asking the assistant a question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// The question text; a missing field is treated as an empty question
    #[serde(default)]
    question: String,
}

/// Response payload carrying the assistant's canned reply.
#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    /// The assistant's reply
    response: String,
}

/// Handler for POST /api/ai/ask - Returns a canned reply for the question.
#[tracing::instrument]
#[utoipa::path(
    post,
    path = "/api/ai/ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Assistant reply", body = AskResponse)
    ),
    tag = "Assistant"
)]
pub async fn ask_handler(Json(request): Json<AskRequest>) -> Json<AskResponse> {
    let kind = classify(&request.question);
    Json(AskResponse {
        response: kind.reply().to_string(),
    })
}

/// Creates and returns the assistant API router.
pub fn create_api_router() -> Router {
    Router::new().route("/ai/ask", post(ask_handler))
}
