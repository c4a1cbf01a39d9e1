use std::env;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha512};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::warn;

/// The signed session layer the router is built with.
pub type SessionLayer = SessionManagerLayer<SqliteStore, SignedCookie>;

/// Cookie policy for the login session. Production gets a `__Host-` prefixed,
/// Strict, short-lived cookie; everything else gets a relaxed one that works
/// over plain http.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    cookie_name: &'static str,
    secure: bool,
    same_site: SameSite,
    inactivity_limit: Duration,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        match environment.as_str() {
            "production" => Self::production(),
            _ => Self::development(),
        }
    }

    fn production() -> Self {
        SessionConfig {
            cookie_name: "__Host-tasklist_session",
            secure: true,
            same_site: SameSite::Strict,
            inactivity_limit: Duration::hours(2),
        }
    }

    fn development() -> Self {
        SessionConfig {
            cookie_name: "tasklist_session",
            secure: false,
            same_site: SameSite::Lax,
            inactivity_limit: Duration::days(7),
        }
    }

    pub fn create_layer(&self, store: SqliteStore) -> SessionLayer {
        SessionManagerLayer::new(store)
            .with_name(self.cookie_name)
            .with_secure(self.secure)
            .with_http_only(true)
            .with_same_site(self.same_site)
            .with_expiry(Expiry::OnInactivity(self.inactivity_limit))
            .with_signed(signing_key())
    }
}

/// Signing key from SESSION_SECRET. Accepts the secret base64-encoded or raw;
/// secrets shorter than the 64 bytes a key needs are stretched with SHA-512.
fn signing_key() -> Key {
    let secret = match env::var("SESSION_SECRET") {
        Ok(s) if !s.is_empty() => s,
        _ => {
            warn!("SESSION_SECRET not set; sessions will not survive a restart");
            return Key::generate();
        }
    };

    let bytes = STANDARD
        .decode(secret.as_bytes())
        .unwrap_or_else(|_| secret.into_bytes());

    if bytes.len() >= 64 {
        Key::from(&bytes[..64])
    } else {
        Key::from(Sha512::digest(&bytes).as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_cookie_works_over_http() {
        let config = SessionConfig::development();
        assert!(!config.secure);
        assert_eq!(config.cookie_name, "tasklist_session");
    }

    #[test]
    fn test_production_cookie_is_host_locked() {
        let config = SessionConfig::production();
        assert!(config.secure);
        assert!(config.cookie_name.starts_with("__Host-"));
        assert_eq!(config.same_site, SameSite::Strict);
    }
}
