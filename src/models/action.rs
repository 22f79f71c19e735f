use super::{NewTodo, Todo, TodoId};

/// A single request to the todo service. Every user action produces at most
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadTodos,
    CreateTodo(NewTodo),
    /// Full replacement carrying the negated status
    ToggleTodo(Todo),
    /// Full replacement carrying the edited text
    SaveTodo(Todo),
    DeleteTodo(TodoId),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadTodos => "load",
            Action::CreateTodo(_) => "create",
            Action::ToggleTodo(_) => "toggle",
            Action::SaveTodo(_) => "save",
            Action::DeleteTodo(_) => "delete",
        }
    }
}
