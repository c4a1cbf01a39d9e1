pub mod todo;
pub mod user;

pub use todo::{Todo, TodoFields, TodoForm};
pub use user::User;
