use crate::models::{Todo, TodoFields};
use crate::repositories::{RepositoryError, TodoRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    #[error("Todo not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(RepositoryError),
}

// NotFound rows surface as the service-level NotFound rather than a wrapped
// repository error.
impl From<RepositoryError> for TodoServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => TodoServiceError::NotFound,
            other => TodoServiceError::RepositoryError(other),
        }
    }
}

pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Todo>, TodoServiceError> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    pub async fn create(
        &self,
        owner_id: i64,
        fields: TodoFields,
    ) -> Result<i64, TodoServiceError> {
        Ok(self.repository.create(owner_id, fields).await?)
    }

    /// Fetch by id alone. The edit and complete-toggle flows deliberately do
    /// not filter by owner, matching the observed behavior of the original
    /// application; only the delete flow is owner-scoped.
    pub async fn get(&self, id: i64) -> Result<Todo, TodoServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }

    pub async fn update(&self, id: i64, fields: TodoFields) -> Result<(), TodoServiceError> {
        if self.repository.update_fields(id, fields).await? {
            Ok(())
        } else {
            Err(TodoServiceError::NotFound)
        }
    }

    /// Flips the completion flag and returns the new value.
    pub async fn toggle_complete(&self, id: i64) -> Result<bool, TodoServiceError> {
        let todo = self.get(id).await?;
        let next = !todo.complete;
        match self.repository.set_complete(id, next).await {
            Ok(true) => Ok(next),
            Ok(false) => Err(TodoServiceError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Owner-scoped delete. Returns `Ok(false)` when the todo does not exist
    /// or belongs to someone else; callers redirect silently in that case.
    pub async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool, TodoServiceError> {
        match self.repository.find_owned(id, owner_id).await? {
            Some(_) => Ok(self.repository.delete(id).await?),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::todo_repository::MockTodoRepository;
    use mockall::predicate::*;

    fn sample_todo(id: i64, owner_id: i64, complete: bool) -> Todo {
        Todo {
            id,
            title: "Water the plants".to_string(),
            description: "Every other day".to_string(),
            priority: 3,
            complete,
            owner_id,
        }
    }

    #[tokio::test]
    async fn test_get_missing_todo() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.get(42).await;
        assert!(matches!(result, Err(TodoServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_toggle_complete_flips_flag() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(sample_todo(1, 1, false))) }));
        mock_repo
            .expect_set_complete()
            .with(eq(1), eq(true))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(true) }));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.toggle_complete(1).await;
        assert!(matches!(result, Ok(true)));
    }

    #[tokio::test]
    async fn test_delete_owned_is_noop_for_foreign_todo() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_owned()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        mock_repo.expect_delete().times(0);

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.delete_owned(1, 2).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn test_delete_owned_removes_own_todo() {
        let mut mock_repo = MockTodoRepository::new();

        mock_repo
            .expect_find_owned()
            .with(eq(1), eq(1))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some(sample_todo(1, 1, false))) }));
        mock_repo
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(true) }));

        let service = TodoService::new(Arc::new(mock_repo));

        let result = service.delete_owned(1, 1).await;
        assert!(matches!(result, Ok(true)));
    }
}
