use flowhq_server::message::MessageService;

mod common;

#[tokio::test]
async fn message_ids_continue_after_the_seed_messages() {
    let ctx = common::setup().expect("Failed to setup test context");
    let service = MessageService::new(&ctx.store);

    // The seed database ships with two welcome messages.
    let message = service
        .create_message(1, None, "Standup in five".to_string())
        .await
        .unwrap();
    assert_eq!(message.id, 3);

    let next = service
        .create_message(2, None, "Lunch?".to_string())
        .await
        .unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
async fn author_defaults_to_user_one() {
    let ctx = common::setup().expect("Failed to setup test context");
    let service = MessageService::new(&ctx.store);

    let defaulted = service
        .create_message(1, None, "no author given".to_string())
        .await
        .unwrap();
    assert_eq!(defaulted.user_id, 1);

    let explicit = service
        .create_message(1, Some(2), "from Alice".to_string())
        .await
        .unwrap();
    assert_eq!(explicit.user_id, 2);
}

#[tokio::test]
async fn timestamps_use_the_wall_clock_format() {
    let ctx = common::setup().expect("Failed to setup test context");
    let service = MessageService::new(&ctx.store);

    let message = service
        .create_message(1, None, "tick".to_string())
        .await
        .unwrap();

    assert!(
        chrono::NaiveDateTime::parse_from_str(&message.timestamp, "%Y-%m-%d %H:%M:%S").is_ok(),
        "timestamp should be YYYY-MM-DD HH:MM:SS, got {}",
        message.timestamp
    );
}

#[tokio::test]
async fn created_messages_are_persisted() {
    let ctx = common::setup().expect("Failed to setup test context");

    MessageService::new(&ctx.store)
        .create_message(1, Some(2), "remember me".to_string())
        .await
        .unwrap();

    let db = ctx.store.load().await.unwrap();
    assert_eq!(db.messages.len(), 3);
    assert_eq!(db.messages[2].text, "remember me");
}
