#[cfg(test)]
#[path = "view_model_test.rs"]
mod tests;

use crate::backend::{ArcBackend, perform};
use crate::models::{Action, TodoError, TodoId};

use super::TodoList;

/// [`TodoList`] wired to a backend: each operation sends exactly one request
/// and waits for it before reconciling local state.
pub struct TodoViewModel {
    list: TodoList,
    backend: ArcBackend,
}

impl TodoViewModel {
    pub fn new(backend: ArcBackend) -> Self {
        Self {
            list: TodoList::new(),
            backend,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub async fn load(&mut self) -> Result<(), TodoError> {
        let action = self.list.begin_load();
        self.run(action).await
    }

    /// Creates a todo from `text`. Blank text is ignored without contacting
    /// the server.
    pub async fn add(&mut self, text: &str) -> Result<(), TodoError> {
        self.list.set_input(text);
        match self.list.begin_add() {
            Some(action) => self.run(action).await,
            None => Ok(()),
        }
    }

    pub async fn delete(&mut self, id: TodoId) -> Result<(), TodoError> {
        let action = self.list.begin_delete(id)?;
        self.run(action).await
    }

    pub async fn toggle_status(&mut self, id: TodoId) -> Result<(), TodoError> {
        let action = self.list.begin_toggle(id)?;
        self.run(action).await
    }

    pub fn start_edit(&mut self, id: TodoId, text: &str) -> Result<(), TodoError> {
        self.list.start_edit(id, text)
    }

    pub fn set_draft(&mut self, text: &str) {
        self.list.set_draft(text);
    }

    pub async fn save_edit(&mut self, id: TodoId) -> Result<(), TodoError> {
        let action = self.list.begin_save_edit(id)?;
        self.run(action).await
    }

    async fn run(&mut self, action: Action) -> Result<(), TodoError> {
        let outcome = perform(self.backend.as_ref(), action).await;
        self.list.apply(outcome)
    }
}
