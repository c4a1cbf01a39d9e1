pub mod auth_handlers;
pub mod todo_handlers;

pub use auth_handlers::*;
pub use todo_handlers::*;
