use crate::models::{Todo, TodoFields};
use crate::repositories::RepositoryResult;
use async_trait::async_trait;
use sqlx::SqlitePool;

const TODO_COLUMNS: &str = "id, title, description, priority, complete, owner_id";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait TodoRepository: Send + Sync {
    async fn create(&self, owner_id: i64, fields: TodoFields) -> RepositoryResult<i64>;
    async fn list_by_owner(&self, owner_id: i64) -> RepositoryResult<Vec<Todo>>;
    /// Unscoped lookup, used by the edit and complete-toggle flows.
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Todo>>;
    /// Owner-scoped lookup, used by the delete flow.
    async fn find_owned(&self, id: i64, owner_id: i64) -> RepositoryResult<Option<Todo>>;
    async fn update_fields(&self, id: i64, fields: TodoFields) -> RepositoryResult<bool>;
    async fn set_complete(&self, id: i64, complete: bool) -> RepositoryResult<bool>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}

pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, owner_id: i64, fields: TodoFields) -> RepositoryResult<i64> {
        let result = sqlx::query(
            "INSERT INTO todos (title, description, priority, complete, owner_id)
             VALUES (?, ?, ?, FALSE, ?)",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.priority)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_by_owner(&self, owner_id: i64) -> RepositoryResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = ? ORDER BY priority DESC, id"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Todo>> {
        let todo =
            sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(todo)
    }

    async fn find_owned(&self, id: i64, owner_id: i64) -> RepositoryResult<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = ? AND owner_id = ?"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn update_fields(&self, id: i64, fields: TodoFields) -> RepositoryResult<bool> {
        let result =
            sqlx::query("UPDATE todos SET title = ?, description = ?, priority = ? WHERE id = ?")
                .bind(&fields.title)
                .bind(&fields.description)
                .bind(fields.priority)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_complete(&self, id: i64, complete: bool) -> RepositoryResult<bool> {
        let result = sqlx::query("UPDATE todos SET complete = ? WHERE id = ?")
            .bind(complete)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
