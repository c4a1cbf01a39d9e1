pub mod test_helpers {
    use crate::config::session::SessionConfig;
    use crate::repositories::{SqliteTodoRepository, SqliteUserRepository};
    use crate::services::{AuthService, TodoService, UserService};
    use crate::{routes, AppState};
    use axum::Router;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use std::sync::Arc;
    use tower_sessions_sqlx_store::SqliteStore;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a test user with a hashed password
    pub async fn insert_test_user(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, sqlx::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                sqlx::Error::Configuration(format!("Password hashing failed: {}", e).into())
            })?
            .to_string();

        let result = sqlx::query(
            "INSERT INTO users (username, email, first_name, last_name, password_hash, is_active)
             VALUES (?, ?, 'Test', 'User', ?, TRUE)",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a test todo owned by the given user
    pub async fn insert_test_todo(
        pool: &SqlitePool,
        owner_id: i64,
        title: &str,
        priority: i64,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO todos (title, description, priority, complete, owner_id)
             VALUES (?, 'Test description', ?, FALSE, ?)",
        )
        .bind(title)
        .bind(priority)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Build the full application router against the given pool, with a
    /// working session layer. Mirrors the wiring in `main`.
    pub async fn build_test_app(pool: SqlitePool) -> Result<Router, sqlx::Error> {
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let todo_repository = Arc::new(SqliteTodoRepository::new(pool.clone()));

        let user_service = Arc::new(UserService::new(user_repository.clone()));
        let auth_service = Arc::new(AuthService::new(user_repository));
        let todo_service = Arc::new(TodoService::new(todo_repository));

        let app_state = AppState {
            user_service,
            auth_service,
            todo_service,
        };

        let session_store = SqliteStore::new(pool);
        session_store.migrate().await?;

        let session_layer = SessionConfig::from_env().create_layer(session_store);

        Ok(routes::build_router(app_state, session_layer))
    }
}
