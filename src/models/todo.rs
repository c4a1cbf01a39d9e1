use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub complete: bool,
    pub owner_id: i64,
}

/// Form body shared by the add-todo and edit-todo submissions.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub priority: i64,
}

// Service request model
#[derive(Debug, Clone)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub priority: i64,
}

impl From<TodoForm> for TodoFields {
    fn from(form: TodoForm) -> Self {
        TodoFields {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            priority: form.priority,
        }
    }
}
