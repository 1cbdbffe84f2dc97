use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::{Store, StoreError};

pub mod api;

/// A chat message posted to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    /// Unique identifier for the message
    pub id: i64,
    /// Channel the message was posted to
    pub channel_id: i64,
    /// Author of the message
    pub user_id: i64,
    /// Message body
    pub text: String,
    /// Creation time, formatted as `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

pub struct MessageService<'a> {
    store: &'a Store,
}

impl MessageService<'_> {
    pub fn new(store: &Store) -> MessageService<'_> {
        MessageService { store }
    }

    /// Creates a new message in the store.
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel the message is posted to.
    /// * `user_id` - The author; defaults to user 1 when absent.
    /// * `text` - The message body.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Message` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_message(
        &self,
        channel_id: i64,
        user_id: Option<i64>,
        text: String,
    ) -> Result<Message, StoreError> {
        let store = self.store.lock().await;
        let mut db = store.load()?;

        let message = Message {
            id: db.messages.len() as i64 + 1,
            channel_id,
            user_id: user_id.unwrap_or(1),
            text,
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        db.messages.push(message.clone());
        store.save(&db)?;
        Ok(message)
    }
}
