use crate::store::Store;
use crate::task::{Task, TaskService, TaskServiceError};
use crate::web::api::ErrorResponse;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request payload for creating a task.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// What needs doing
    text: Option<String>,
    /// User the task is assigned to
    assigned_to: Option<i64>,
}

/// Handler for POST /api/tasks - Creates a new task.
#[tracing::instrument(skip(store))]
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = Task),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task_handler(
    State(store): State<Arc<Store>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let Some(text) = request.text else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("text is required".to_string())),
        ));
    };

    let service = TaskService::new(&store);
    match service.create_task(text, request.assigned_to).await {
        Ok(task) => Ok(Json(task)),
        Err(err) => {
            tracing::error!("Failed to create task: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create task".to_string())),
            ))
        }
    }
}

/// Handler for POST /api/tasks/{task_id}/toggle - Flips a task's completion state.
#[tracing::instrument(skip(store))]
#[utoipa::path(
    post,
    path = "/api/tasks/{task_id}/toggle",
    params(
        ("task_id" = i64, Path, description = "Id of the task to toggle")
    ),
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 404, description = "No task with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn toggle_task_handler(
    State(store): State<Arc<Store>>,
    Path(task_id): Path<i64>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let service = TaskService::new(&store);
    match service.toggle_task(task_id).await {
        Ok(task) => Ok(Json(task)),
        Err(TaskServiceError::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Task not found".to_string())),
        )),
        Err(err) => {
            tracing::error!("Failed to toggle task {}: {}", task_id, err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to toggle task".to_string())),
            ))
        }
    }
}

/// Creates and returns the tasks API router.
pub fn create_api_router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/tasks", post(create_task_handler))
        .route("/tasks/{task_id}/toggle", post(toggle_task_handler))
        .with_state(store)
}
