use crate::models::User;
use crate::repositories::{RepositoryError, UserRepository};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Username must be at least 3 characters")]
    InvalidUsername,
    #[error("Password too weak (minimum 8 characters)")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username or email already registered")]
    AlreadyRegistered,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, UserServiceError> {
        self.validate_username(&request.username)?;
        self.validate_email(&request.email)?;

        if request.password != request.password_confirm {
            return Err(UserServiceError::PasswordMismatch);
        }
        self.validate_password(&request.password)?;

        let password_hash = self.hash_password(&request.password)?;

        match self
            .repository
            .create_user(
                &request.username,
                &request.email,
                &request.first_name,
                &request.last_name,
                &password_hash,
            )
            .await
        {
            Ok(user) => Ok(user),
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::AlreadyRegistered),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    fn validate_username(&self, username: &str) -> Result<(), UserServiceError> {
        if username.len() < 3 || username.len() > 64 {
            return Err(UserServiceError::InvalidUsername);
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), UserServiceError> {
        if !email.contains('@') || email.len() > 255 || email.is_empty() {
            return Err(UserServiceError::InvalidEmail);
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), UserServiceError> {
        if password.len() < 8 {
            return Err(UserServiceError::WeakPassword);
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> Result<String, UserServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserServiceError::HashingError(e.to_string()))
    }
}
