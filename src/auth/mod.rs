pub mod middleware;
pub mod session;

pub use session::CurrentUser;
