pub mod todo_repository;
pub mod user_repository;

pub use todo_repository::{SqliteTodoRepository, TodoRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Row not found")]
    NotFound,
    #[error("Row already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
