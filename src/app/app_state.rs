#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use crate::models::Todo;
use crate::store::TodoList;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// UI-side state: the todo collection plus what the user is pointing at.
#[derive(Debug, Default)]
pub struct AppState {
    pub todos: TodoList,
    pub focus: Focus,
    cursor: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.cursor.min(self.todos.len() - 1))
        }
    }

    pub fn selected(&self) -> Option<&Todo> {
        self.cursor().map(|i| &self.todos.todos()[i])
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.cursor() {
            self.cursor = (i + 1).min(self.todos.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.cursor() {
            self.cursor = i.saturating_sub(1);
        }
    }

    pub fn select_last(&mut self) {
        self.cursor = self.todos.len().saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    /// Keeps the cursor on a valid row after the collection shrank.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor().unwrap_or(0);
    }
}
