pub mod auth_service;
pub mod todo_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceError, LoginRequest};
pub use todo_service::{TodoService, TodoServiceError};
pub use user_service::{RegisterRequest, UserService, UserServiceError};
