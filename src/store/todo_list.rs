#[cfg(test)]
#[path = "todo_list_test.rs"]
mod tests;

use crate::models::{Action, NewTodo, Outcome, Todo, TodoError, TodoId};

/// The single record currently being text-edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub draft: String,
}

/// Client-side mirror of the server's todo collection.
///
/// Every user action goes through two steps: a `begin_*` transition that
/// validates the request against the current state and returns the
/// [`Action`] to send, and [`TodoList::apply`] which reconciles the local
/// state with the request's [`Outcome`]. Neither step performs I/O.
#[derive(Debug, Default, Clone)]
pub struct TodoList {
    todos: Vec<Todo>,
    pending_loads: usize,
    input: String,
    editing: Option<EditSession>,
    pending_saves: Vec<TodoId>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// True while at least one load is in flight.
    pub fn loading(&self) -> bool {
        self.pending_loads > 0
    }

    /// Text of the new-task input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        matches!(&self.editing, Some(session) if session.id == id)
    }

    /// True between committing an edit of `id` and the server's answer.
    pub fn is_saving(&self, id: TodoId) -> bool {
        self.pending_saves.contains(&id)
    }

    pub fn begin_load(&mut self) -> Action {
        self.pending_loads += 1;
        Action::LoadTodos
    }

    /// Returns `None` when the input holds only whitespace; nothing is sent
    /// in that case.
    pub fn begin_add(&self) -> Option<Action> {
        let task = self.input.trim();
        if task.is_empty() {
            return None;
        }
        Some(Action::CreateTodo(NewTodo::new(task)))
    }

    pub fn begin_delete(&self, id: TodoId) -> Result<Action, TodoError> {
        self.find(id)?;
        Ok(Action::DeleteTodo(id))
    }

    pub fn begin_toggle(&self, id: TodoId) -> Result<Action, TodoError> {
        let todo = self.find(id)?;
        let status = !todo.status;
        Ok(Action::ToggleTodo(todo.clone().with_status(status)))
    }

    /// Opens the edit session for `id` with `text` as the draft. Any other
    /// open session is replaced.
    pub fn start_edit(&mut self, id: TodoId, text: impl Into<String>) -> Result<(), TodoError> {
        self.find(id)?;
        self.editing = Some(EditSession {
            id,
            draft: text.into(),
        });
        Ok(())
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = text.into();
        }
    }

    /// Commits the open session for `id`. A session whose record vanished in
    /// the meantime is closed and reported as [`TodoError::NotFound`].
    pub fn begin_save_edit(&mut self, id: TodoId) -> Result<Action, TodoError> {
        let draft = match &self.editing {
            Some(session) if session.id == id => session.draft.clone(),
            _ => return Err(TodoError::NotEditing(id)),
        };
        let todo = match self.find(id) {
            Ok(todo) => todo.clone(),
            Err(err) => {
                self.editing = None;
                return Err(err);
            }
        };
        self.pending_saves.push(id);
        Ok(Action::SaveTodo(todo.with_task(draft)))
    }

    /// Reconciles local state with the outcome of a request. Local state only
    /// changes on success, except that a failed load empties the collection and
    /// a finished save always closes the edit session.
    pub fn apply(&mut self, outcome: Outcome) -> Result<(), TodoError> {
        match outcome {
            Outcome::Loaded(result) => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                match result {
                    Ok(todos) => {
                        self.todos = todos;
                        Ok(())
                    }
                    Err(err) => {
                        self.todos.clear();
                        Err(err.into())
                    }
                }
            }

            Outcome::Created(result) => {
                let todo = result?;
                self.todos.push(todo);
                self.input.clear();
                Ok(())
            }

            Outcome::Deleted(id, result) => {
                result?;
                self.todos.retain(|t| t.id != id);
                if self.is_editing(id) {
                    self.editing = None;
                }
                Ok(())
            }

            // The confirmed status is written as is, so overlapping toggles
            // settle on what the server stored last.
            Outcome::Toggled(id, result) => {
                let confirmed = result?;
                self.find_mut(id)?.status = confirmed.status;
                Ok(())
            }

            Outcome::Saved(id, result) => {
                if let Some(pos) = self.pending_saves.iter().position(|p| *p == id) {
                    self.pending_saves.remove(pos);
                }
                if self.is_editing(id) {
                    self.editing = None;
                }
                let updated = result?;
                let todo = self.find_mut(id)?;
                *todo = updated;
                Ok(())
            }
        }
    }

    fn find(&self, id: TodoId) -> Result<&Todo, TodoError> {
        self.get(id).ok_or(TodoError::NotFound(id))
    }

    fn find_mut(&mut self, id: TodoId) -> Result<&mut Todo, TodoError> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }
}
