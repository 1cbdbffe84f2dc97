use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::{Store, StoreError};

pub mod api;

/// A calendar event.
///
/// `description` and `attendees` carry serde defaults so data files written
/// before those fields existed still parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier for the event
    pub id: i64,
    /// Event title
    pub title: String,
    /// Start time
    pub start: String,
    /// End time
    pub end: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// User organizing the event
    pub organizer: i64,
    /// Users invited to the event
    #[serde(default)]
    pub attendees: Vec<i64>,
}

pub struct EventService<'a> {
    store: &'a Store,
}

impl EventService<'_> {
    pub fn new(store: &Store) -> EventService<'_> {
        EventService { store }
    }

    /// Creates a new calendar event in the store.
    ///
    /// Optional fields default to an empty description, user 1 as organizer,
    /// and users 1 and 2 as attendees.
    #[tracing::instrument(skip(self))]
    pub async fn create_event(
        &self,
        title: String,
        start: String,
        end: String,
        description: Option<String>,
        organizer: Option<i64>,
        attendees: Option<Vec<i64>>,
    ) -> Result<Event, StoreError> {
        let store = self.store.lock().await;
        let mut db = store.load()?;

        let event = Event {
            id: db.events.len() as i64 + 1,
            title,
            start,
            end,
            description: description.unwrap_or_default(),
            organizer: organizer.unwrap_or(1),
            attendees: attendees.unwrap_or_else(|| vec![1, 2]),
        };

        db.events.push(event.clone());
        store.save(&db)?;
        Ok(event)
    }
}
