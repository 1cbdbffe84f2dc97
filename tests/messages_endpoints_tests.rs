use axum::http::StatusCode;
use flowhq_server::web::api::create_api_router;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn can_create_a_message() {
    let ctx = common::setup().expect("Failed to setup test context");

    let app = create_api_router(ctx.store.clone());
    let response = app
        .oneshot(common::post_json(
            "/api/messages",
            json!({"channel_id": 1, "text": "Standup in five"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = common::response_json(response).await;
    // The seed database ships with two messages, so the next id is 3.
    assert_eq!(message["id"], 3);
    assert_eq!(message["channel_id"], 1);
    assert_eq!(message["text"], "Standup in five");
    assert_eq!(message["user_id"], 1);
    assert!(message["timestamp"].is_string());
}

#[tokio::test]
async fn can_post_as_a_specific_user() {
    let ctx = common::setup().expect("Failed to setup test context");

    let app = create_api_router(ctx.store.clone());
    let response = app
        .oneshot(common::post_json(
            "/api/messages",
            json!({"channel_id": 2, "text": "hi from Alice", "user_id": 2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let message = common::response_json(response).await;
    assert_eq!(message["user_id"], 2);
    assert_eq!(message["channel_id"], 2);
}

#[tokio::test]
async fn cannot_create_a_message_without_a_channel() {
    let ctx = common::setup().expect("Failed to setup test context");

    let app = create_api_router(ctx.store.clone());
    let response = app
        .oneshot(common::post_json("/api/messages", json!({"text": "lost"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["error"], "channel_id is required");
}

#[tokio::test]
async fn cannot_create_a_message_without_text() {
    let ctx = common::setup().expect("Failed to setup test context");

    let app = create_api_router(ctx.store.clone());
    let response = app
        .oneshot(common::post_json("/api/messages", json!({"channel_id": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::response_json(response).await;
    assert_eq!(body["error"], "text is required");
}
