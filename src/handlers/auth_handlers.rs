use crate::auth::session;
use crate::error::{AppError, Result};
use crate::services::{
    auth_service::{AuthServiceError, LoginRequest},
    user_service::{RegisterRequest, UserServiceError},
};
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
    registered: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    /// Username or email; the field keeps the name the original form used.
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    username: String,
    email: String,
    firstname: String,
    lastname: String,
    password: String,
    password2: String,
}

/// GET /auth - login page
pub async fn login_page() -> Result<Response> {
    let template = LoginTemplate {
        error: None,
        registered: false,
    };
    Ok(Html(template.render()?).into_response())
}

/// POST /auth - login form submission
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let request = LoginRequest {
        identifier: form.email,
        password: form.password,
    };

    match state.auth_service.authenticate(request).await {
        Ok(user) => {
            session::establish(&session, &user)
                .await
                .map_err(|_| AppError::InternalError)?;

            tracing::info!(username = %user.username, "user logged in");
            Ok(Redirect::to("/").into_response())
        }
        Err(err) => {
            let msg = match err {
                AuthServiceError::InvalidCredentials => "Invalid username or password",
                _ => "An error occurred. Please try again.",
            };
            let template = LoginTemplate {
                error: Some(msg.to_string()),
                registered: false,
            };
            Ok(Html(template.render()?).into_response())
        }
    }
}

/// GET /auth/register - registration page
pub async fn register_page() -> Result<Response> {
    let template = RegisterTemplate { error: None };
    Ok(Html(template.render()?).into_response())
}

/// POST /auth/register - registration form submission; renders the login
/// page on success.
pub async fn register_handler(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let request = RegisterRequest {
        username: form.username,
        email: form.email,
        first_name: form.firstname,
        last_name: form.lastname,
        password: form.password,
        password_confirm: form.password2,
    };

    match state.user_service.register(request).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "new user registered");
            let template = LoginTemplate {
                error: None,
                registered: true,
            };
            Ok(Html(template.render()?).into_response())
        }
        Err(err) => {
            let msg = match err {
                UserServiceError::InvalidUsername => "Username must be at least 3 characters",
                UserServiceError::InvalidEmail => "Please enter a valid email address",
                UserServiceError::WeakPassword => "Password must be at least 8 characters",
                UserServiceError::PasswordMismatch => "Passwords do not match",
                UserServiceError::AlreadyRegistered => "Username or email already registered",
                _ => "Registration failed. Please try again.",
            };
            let template = RegisterTemplate {
                error: Some(msg.to_string()),
            };
            Ok(Html(template.render()?).into_response())
        }
    }
}

/// GET /auth/logout
pub async fn logout_handler(session: Session) -> impl IntoResponse {
    session::clear(&session).await;
    Redirect::to("/auth")
}
