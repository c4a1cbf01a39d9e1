use tasklist::{
    config::session::SessionConfig,
    db,
    repositories::{SqliteTodoRepository, SqliteUserRepository},
    routes,
    services::{AuthService, TodoService, UserService},
    AppState,
};

use std::{net::SocketAddr, sync::Arc};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

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

    // Sessions live in the same database, in their own table
    let session_store = SqliteStore::new(pool)
        .with_table_name("sessions")
        .expect("Invalid session table name for sessions");
    session_store.migrate().await?;

    let session_layer = SessionConfig::from_env().create_layer(session_store);

    let app = routes::build_router(app_state, session_layer);

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from((host.parse::<std::net::IpAddr>()?, port));

    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
