use crate::auth::middleware::require_auth;
use crate::config::session::SessionLayer;
use crate::{handlers, AppState};
use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, session_layer: SessionLayer) -> Router {
    let todo_routes = Router::new()
        .route("/", get(handlers::home_handler))
        .route(
            "/add-todo",
            get(handlers::add_todo_page).post(handlers::create_todo_handler),
        )
        .route(
            "/edit-todo/{id}",
            get(handlers::edit_todo_page).post(handlers::update_todo_handler),
        )
        .route("/delete/{id}", get(handlers::delete_todo_handler))
        .route("/complete/{id}", get(handlers::complete_todo_handler))
        .route_layer(middleware::from_fn(require_auth));

    let auth_routes = Router::new()
        .route(
            "/auth",
            get(handlers::login_page).post(handlers::login_handler),
        )
        .route(
            "/auth/register",
            get(handlers::register_page).post(handlers::register_handler),
        )
        .route("/auth/logout", get(handlers::logout_handler));

    Router::new()
        .merge(todo_routes)
        .merge(auth_routes)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
