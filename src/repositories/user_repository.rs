use crate::models::User;
use crate::repositories::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Column set shared by every user query.
const USER_COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, is_active";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        password_hash: &str,
    ) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    /// Matches on username or email, whichever the login form carried.
    async fn find_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<User>>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        password_hash: &str,
    ) -> RepositoryResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, first_name, last_name, password_hash, is_active)
             VALUES (?, ?, ?, ?, ?, TRUE)",
        )
        .bind(username)
        .bind(email)
        .bind(first_name)
        .bind(last_name)
        .bind(password_hash)
        .execute(&self.pool)
        .await;

        match result {
            Ok(res) => {
                let id = res.last_insert_rowid();
                self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
            }
            Err(e) => {
                if e.to_string().contains("UNIQUE") {
                    Err(RepositoryError::AlreadyExists)
                } else {
                    Err(RepositoryError::Database(e))
                }
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ? OR email = ?"
        ))
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
