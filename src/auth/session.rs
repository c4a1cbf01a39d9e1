use crate::models::User;
use tower_sessions::Session;

const USER_ID_KEY: &str = "user_id";
const USERNAME_KEY: &str = "username";

/// Identity extracted from a request's session.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Record the logged-in identity in the session. The session layer signs the
/// cookie and enforces expiry.
pub async fn establish(session: &Session, user: &User) -> Result<(), tower_sessions::session::Error> {
    session.insert(USER_ID_KEY, user.id).await?;
    session.insert(USERNAME_KEY, user.username.clone()).await?;
    Ok(())
}

/// Returns `None` when the session is absent, expired, or tampered with.
/// Callers treat `None` as "not logged in" and redirect to the login page.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    let id = session.get::<i64>(USER_ID_KEY).await.ok().flatten()?;
    let username = session.get::<String>(USERNAME_KEY).await.ok().flatten()?;
    Some(CurrentUser { id, username })
}

/// Drop the session record and clear the cookie.
pub async fn clear(session: &Session) {
    let _ = session.flush().await;
}
