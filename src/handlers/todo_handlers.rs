use crate::auth::session::{self, CurrentUser};
use crate::error::{AppError, Result};
use crate::models::{Todo, TodoForm};
use crate::services::todo_service::TodoServiceError;
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

#[derive(Template, WebTemplate)]
#[template(path = "todos/home.html")]
struct HomeTemplate {
    username: String,
    todos: Vec<Todo>,
}

#[derive(Template, WebTemplate)]
#[template(path = "todos/add-todo.html")]
struct AddTodoTemplate {
    username: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "todos/edit-todo.html")]
struct EditTodoTemplate {
    username: String,
    todo: Todo,
}

impl From<TodoServiceError> for AppError {
    fn from(e: TodoServiceError) -> Self {
        match e {
            TodoServiceError::NotFound => AppError::TodoNotFound,
            TodoServiceError::RepositoryError(crate::repositories::RepositoryError::Database(
                e,
            )) => AppError::Database(e),
            _ => AppError::InternalError,
        }
    }
}

/// The auth middleware already guards these routes; the extraction here is
/// what supplies the owner id and the username for logging.
async fn current_user(session: &Session) -> Result<CurrentUser> {
    session::current_user(session)
        .await
        .ok_or(AppError::NotAuthenticated)
}

/// GET / - list the current user's todos
pub async fn home_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let user = current_user(&session).await?;

    let todos = state.todo_service.list_for_owner(user.id).await?;
    tracing::info!(username = %user.username, "todos requested");

    let template = HomeTemplate {
        username: user.username,
        todos,
    };
    Ok(Html(template.render()?).into_response())
}

/// GET /add-todo - add-todo form
pub async fn add_todo_page(session: Session) -> Result<Response> {
    let user = current_user(&session).await?;
    tracing::info!(username = %user.username, "add-todo page requested");

    let template = AddTodoTemplate {
        username: user.username,
    };
    Ok(Html(template.render()?).into_response())
}

/// POST /add-todo - create a todo owned by the current user
pub async fn create_todo_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<TodoForm>,
) -> Result<Response> {
    let user = current_user(&session).await?;

    state.todo_service.create(user.id, form.into()).await?;
    tracing::info!(username = %user.username, "new todo added");

    Ok(Redirect::to("/").into_response())
}

/// GET /edit-todo/{id} - edit form for the given todo
pub async fn edit_todo_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let user = current_user(&session).await?;

    // Fetched by id alone, without an owner filter; see TodoService::get.
    let todo = state.todo_service.get(id).await?;
    tracing::info!(username = %user.username, todo_id = id, "edit page requested");

    let template = EditTodoTemplate {
        username: user.username,
        todo,
    };
    Ok(Html(template.render()?).into_response())
}

/// POST /edit-todo/{id} - overwrite title/description/priority
pub async fn update_todo_handler(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<TodoForm>,
) -> Result<Response> {
    let user = current_user(&session).await?;

    state.todo_service.update(id, form.into()).await?;
    tracing::info!(username = %user.username, todo_id = id, "todo edited");

    Ok(Redirect::to("/").into_response())
}

/// GET /delete/{id} - owner-scoped delete; silent redirect when the todo is
/// missing or belongs to someone else
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let user = current_user(&session).await?;

    if state.todo_service.delete_owned(id, user.id).await? {
        tracing::info!(username = %user.username, todo_id = id, "todo deleted");
    }

    Ok(Redirect::to("/").into_response())
}

/// GET /complete/{id} - toggle the completion flag
pub async fn complete_todo_handler(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let user = current_user(&session).await?;

    let complete = state.todo_service.toggle_complete(id).await?;
    tracing::info!(
        username = %user.username,
        todo_id = id,
        complete,
        "todo completion toggled"
    );

    Ok(Redirect::to("/").into_response())
}
