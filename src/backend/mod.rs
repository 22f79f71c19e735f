pub mod rest;

pub use rest::RestBackend;

#[cfg(test)]
use mockall::automock;

use crate::config::BackendConfig;
use crate::models::{Action, BackendError, NewTodo, Outcome, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;

/// CRUD operations of the todo service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TodoBackend {
    fn name(&self) -> &str;

    /// Fetch the whole collection in server order.
    async fn list_todos(&self) -> Result<Vec<Todo>, BackendError>;

    async fn get_todo(&self, id: TodoId) -> Result<Todo, BackendError>;

    /// Create a todo and return it with its server-assigned id.
    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, BackendError>;

    /// Replace the todo `todo.id` and return the stored record.
    async fn update_todo(&self, todo: Todo) -> Result<Todo, BackendError>;

    async fn delete_todo(&self, id: TodoId) -> Result<(), BackendError>;
}

pub type ArcBackend = Arc<dyn TodoBackend + Send + Sync>;

pub fn new_backend(config: &BackendConfig) -> ArcBackend {
    let mut backend = RestBackend::new().with_endpoint(&config.endpoint);
    if let Some(timeout) = config.timeout() {
        backend = backend.with_timeout(timeout);
    }
    log::debug!("Using {} service at {}", backend.name(), backend.endpoint());
    backend.into()
}

/// Sends the request described by `action` and tags the result for
/// [`crate::store::TodoList::apply`].
pub async fn perform(backend: &(dyn TodoBackend + Send + Sync), action: Action) -> Outcome {
    log::debug!("Performing {} request", action.name());
    match action {
        Action::LoadTodos => Outcome::Loaded(backend.list_todos().await),
        Action::CreateTodo(todo) => Outcome::Created(backend.create_todo(todo).await),
        Action::ToggleTodo(todo) => {
            let id = todo.id;
            Outcome::Toggled(id, backend.update_todo(todo).await)
        }
        Action::SaveTodo(todo) => {
            let id = todo.id;
            Outcome::Saved(id, backend.update_todo(todo).await)
        }
        Action::DeleteTodo(id) => Outcome::Deleted(id, backend.delete_todo(id).await),
    }
}
