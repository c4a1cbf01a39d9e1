pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::UserService>,
    pub auth_service: Arc<services::AuthService>,
    pub todo_service: Arc<services::TodoService>,
}
