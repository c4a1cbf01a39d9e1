use crate::auth::session;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Route layer for the todo routes. Requests without a logged-in session are
/// sent to the login page instead of reaching the handler.
pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    match session::current_user(&session).await {
        Some(_) => next.run(request).await,
        None => Redirect::to("/auth").into_response(),
    }
}
