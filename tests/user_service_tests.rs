use tasklist::{
    repositories::SqliteUserRepository,
    services::user_service::{RegisterRequest, UserService, UserServiceError},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn register_request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: "password123".to_string(),
        password_confirm: "password123".to_string(),
    }
}

#[tokio::test]
async fn test_register_success() {
    // Create isolated test database
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = UserService::new(repository);

    let result = service
        .register(register_request("testuser", "testuser@example.com"))
        .await;
    assert!(result.is_ok());

    let user = result.unwrap();
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "testuser@example.com");
    assert!(user.is_active);
    // Stored as an argon2 PHC string, never the raw password
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let result1 = service
        .register(register_request("duplicate", "first@example.com"))
        .await;
    assert!(result1.is_ok());

    let result2 = service
        .register(register_request("duplicate", "second@example.com"))
        .await;
    assert!(matches!(result2, Err(UserServiceError::AlreadyRegistered)));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let result1 = service
        .register(register_request("first", "same@example.com"))
        .await;
    assert!(result1.is_ok());

    let result2 = service
        .register(register_request("second", "same@example.com"))
        .await;
    assert!(matches!(result2, Err(UserServiceError::AlreadyRegistered)));
}

#[tokio::test]
async fn test_find_user_by_id() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = UserService::new(repository);

    let user = service
        .register(register_request("findme", "findme@example.com"))
        .await
        .unwrap();

    let found = service.find_user_by_id(user.id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().username, "findme");

    let missing = service.find_user_by_id(user.id + 1000).await.unwrap();
    assert!(missing.is_none());
}
