use crate::models::User;
use crate::repositories::UserRepository;
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] crate::repositories::RepositoryError),
}

pub struct LoginRequest {
    /// Username or email, as submitted on the login form.
    pub identifier: String,
    pub password: String,
}

pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Uniform `InvalidCredentials` on unknown user and on hash mismatch.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<User, AuthServiceError> {
        let user = self
            .user_repository
            .find_by_identifier(&request.identifier)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !self.verify_password(&request.password, &user.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<User, AuthServiceError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}
