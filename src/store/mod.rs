use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};
use utoipa::ToSchema;

use crate::event::Event;
use crate::message::Message;
use crate::task::Task;

/// A registered account. Seed data only; the HTTP surface never mutates users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Role within the team, e.g. "admin" or "member"
    pub role: String,
}

/// A chat channel. Seed data only; the HTTP surface never mutates channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Channel {
    /// Unique identifier for the channel
    pub id: i64,
    /// Channel name
    pub name: String,
    /// What the channel is for
    pub description: String,
    /// User who created the channel
    pub created_by: i64,
}

/// The full persisted aggregate: everything FlowHQ knows, in one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Database {
    pub users: Vec<User>,
    pub channels: Vec<Channel>,
    pub messages: Vec<Message>,
    pub events: Vec<Event>,
    pub tasks: Vec<Task>,
}

impl Database {
    /// Returns the fixed default contents written on first startup: two users,
    /// two channels, two welcome messages, one event, and no tasks.
    pub fn seed() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    role: "admin".to_string(),
                },
                User {
                    id: 2,
                    name: "Alice Smith".to_string(),
                    email: "alice@example.com".to_string(),
                    role: "member".to_string(),
                },
            ],
            channels: vec![
                Channel {
                    id: 1,
                    name: "general".to_string(),
                    description: "General discussion".to_string(),
                    created_by: 1,
                },
                Channel {
                    id: 2,
                    name: "random".to_string(),
                    description: "Random chat".to_string(),
                    created_by: 1,
                },
            ],
            messages: vec![
                Message {
                    id: 1,
                    channel_id: 1,
                    user_id: 1,
                    text: "Welcome to FlowHQ!".to_string(),
                    timestamp: "2024-01-15 10:00:00".to_string(),
                },
                Message {
                    id: 2,
                    channel_id: 1,
                    user_id: 2,
                    text: "Thanks, excited to be here!".to_string(),
                    timestamp: "2024-01-15 10:05:00".to_string(),
                },
            ],
            events: vec![Event {
                id: 1,
                title: "Team Standup".to_string(),
                start: "2024-01-16T09:00:00".to_string(),
                end: "2024-01-16T09:30:00".to_string(),
                description: String::new(),
                organizer: 1,
                attendees: Vec::new(),
            }],
            tasks: Vec::new(),
        }
    }
}

/// Custom error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but does not hold a valid serialized Database.
    #[error("data file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Represents an I/O error while reading the backing file.
    #[error("failed to read data file: {0}")]
    Read(#[source] std::io::Error),
    /// Represents an I/O error while writing the backing file.
    #[error("failed to write data file: {0}")]
    Write(#[source] std::io::Error),
}

/// Durable storage for the [`Database`], backed by a single JSON file.
///
/// Every load-mutate-save sequence must run while holding the guard returned
/// by [`Store::lock`]. The internal mutex is the single-writer serialization
/// point: concurrent requests queue on it instead of racing on the file.
pub struct Store {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Store {
    /// Creates a store backed by the given file path. The file is created and
    /// seeded on the first load.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Acquires the guard that serializes load-mutate-save sequences.
    pub async fn lock(&self) -> StoreGuard<'_> {
        StoreGuard {
            store: self,
            _guard: self.write_lock.lock().await,
        }
    }

    /// Loads the database under a guard held for the duration of the read.
    pub async fn load(&self) -> Result<Database, StoreError> {
        self.lock().await.load()
    }
}

/// Exclusive access to the backing file for one load-mutate-save sequence.
pub struct StoreGuard<'a> {
    store: &'a Store,
    _guard: MutexGuard<'a, ()>,
}

impl StoreGuard<'_> {
    /// Reads the entire database from the backing file.
    ///
    /// If the file does not exist yet, the seed database is written out and
    /// returned instead.
    pub fn load(&self) -> Result<Database, StoreError> {
        let path = &self.store.path;
        if !path.exists() {
            let db = Database::seed();
            tracing::info!(path = %path.display(), "no data file found, seeding defaults");
            self.save(&db)?;
            return Ok(db);
        }

        let raw = std::fs::read_to_string(path).map_err(StoreError::Read)?;
        let db = serde_json::from_str(&raw)?;
        Ok(db)
    }

    /// Serializes the full database and overwrites the backing file.
    pub fn save(&self, db: &Database) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(db)?;
        std::fs::write(&self.store.path, raw).map_err(StoreError::Write)
    }
}
