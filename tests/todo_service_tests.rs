use tasklist::{
    models::TodoFields,
    repositories::SqliteTodoRepository,
    services::todo_service::{TodoService, TodoServiceError},
    test_utils::test_helpers,
};
use sqlx::SqlitePool;
use std::sync::Arc;

fn fields(title: &str, priority: i64) -> TodoFields {
    TodoFields {
        title: title.to_string(),
        description: "A description".to_string(),
        priority,
    }
}

async fn setup() -> (TodoService, SqlitePool, i64, i64) {
    let pool = test_helpers::create_test_db().await.unwrap();
    let alice = test_helpers::insert_test_user(&pool, "alice", "alice@example.com", "password123")
        .await
        .unwrap();
    let bob = test_helpers::insert_test_user(&pool, "bob", "bob@example.com", "password123")
        .await
        .unwrap();
    let service = TodoService::new(Arc::new(SqliteTodoRepository::new(pool.clone())));
    (service, pool, alice, bob)
}

#[tokio::test]
async fn test_create_and_list_scoped_to_owner() {
    let (service, _pool, alice, bob) = setup().await;

    service.create(alice, fields("water-plants", 3)).await.unwrap();
    service.create(alice, fields("buy-groceries", 5)).await.unwrap();
    service.create(bob, fields("walk-the-dog", 1)).await.unwrap();

    let alice_todos = service.list_for_owner(alice).await.unwrap();
    assert_eq!(alice_todos.len(), 2);
    assert!(alice_todos.iter().all(|t| t.owner_id == alice));
    assert!(alice_todos.iter().all(|t| !t.complete));
    // Listing is ordered by priority, highest first
    assert_eq!(alice_todos[0].title, "buy-groceries");

    let bob_todos = service.list_for_owner(bob).await.unwrap();
    assert_eq!(bob_todos.len(), 1);
    assert_eq!(bob_todos[0].title, "walk-the-dog");
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let (service, _pool, alice, _bob) = setup().await;

    let id = service.create(alice, fields("draft", 1)).await.unwrap();
    service.update(id, fields("final", 4)).await.unwrap();

    let todo = service.get(id).await.unwrap();
    assert_eq!(todo.title, "final");
    assert_eq!(todo.priority, 4);

    let missing = service.update(id + 1000, fields("ghost", 1)).await;
    assert!(matches!(missing, Err(TodoServiceError::NotFound)));
}

#[tokio::test]
async fn test_update_is_not_owner_scoped() {
    // The edit flow fetches by id alone; another user's todo is reachable.
    // This mirrors the original application's behavior on purpose.
    let (service, _pool, alice, _bob) = setup().await;

    let id = service.create(alice, fields("alices-todo", 2)).await.unwrap();

    let result = service.update(id, fields("edited-by-anyone", 2)).await;
    assert!(result.is_ok());
    assert_eq!(service.get(id).await.unwrap().title, "edited-by-anyone");
}

#[tokio::test]
async fn test_toggle_complete_twice_round_trips() {
    let (service, _pool, alice, _bob) = setup().await;

    let id = service.create(alice, fields("flip-me", 3)).await.unwrap();
    assert!(!service.get(id).await.unwrap().complete);

    assert!(service.toggle_complete(id).await.unwrap());
    assert!(service.get(id).await.unwrap().complete);

    assert!(!service.toggle_complete(id).await.unwrap());
    assert!(!service.get(id).await.unwrap().complete);
}

#[tokio::test]
async fn test_delete_owned_removes_only_own_rows() {
    let (service, _pool, alice, bob) = setup().await;

    let id = service.create(alice, fields("alices-todo", 3)).await.unwrap();

    // Bob cannot delete Alice's todo; silent no-op
    let deleted = service.delete_owned(id, bob).await.unwrap();
    assert!(!deleted);
    assert!(service.get(id).await.is_ok());

    // Alice can
    let deleted = service.delete_owned(id, alice).await.unwrap();
    assert!(deleted);
    assert!(matches!(
        service.get(id).await,
        Err(TodoServiceError::NotFound)
    ));
}

#[tokio::test]
async fn test_toggle_missing_todo() {
    let (service, _pool, _alice, _bob) = setup().await;

    let result = service.toggle_complete(999).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound)));
}
