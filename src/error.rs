use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error")]
    InternalError,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Anonymous requests land on the login page, HTTP 302.
            AppError::NotAuthenticated => Redirect::to("/auth").into_response(),
            // Missing todo ids redirect to the listing, silently.
            AppError::TodoNotFound => Redirect::to("/").into_response(),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response(),
            AppError::Database(_) | AppError::Template(_) | AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}
