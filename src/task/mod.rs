use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::{Store, StoreError};

pub mod api;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier for the task
    pub id: i64,
    /// What needs doing
    pub text: String,
    /// User the task is assigned to; serializes as null when unassigned
    pub assigned_to: Option<i64>,
    /// Whether the task is done
    pub completed: bool,
    /// Creation time in ISO-8601 format
    pub created_at: String,
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a task not found error.
    #[error("Task with ID {0} not found")]
    TaskNotFound(i64),
    /// Represents a storage error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct TaskService<'a> {
    store: &'a Store,
}

impl TaskService<'_> {
    pub fn new(store: &Store) -> TaskService<'_> {
        TaskService { store }
    }

    /// Creates a new task in the store.
    ///
    /// # Arguments
    ///
    /// * `text` - What needs doing.
    /// * `assigned_to` - The assignee, if any.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(
        &self,
        text: String,
        assigned_to: Option<i64>,
    ) -> Result<Task, TaskServiceError> {
        let store = self.store.lock().await;
        let mut db = store.load()?;

        let task = Task {
            id: db.tasks.len() as i64 + 1,
            text,
            assigned_to,
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        db.tasks.push(task.clone());
        store.save(&db)?;
        Ok(task)
    }

    /// Flips the completion state of the task with the given id.
    ///
    /// Nothing is written when the id does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_task(&self, id: i64) -> Result<Task, TaskServiceError> {
        let store = self.store.lock().await;
        let mut db = store.load()?;

        let task = db
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        task.completed = !task.completed;
        let task = task.clone();

        store.save(&db)?;
        Ok(task)
    }
}
