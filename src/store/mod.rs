pub mod todo_list;
pub mod view_model;

pub use todo_list::{EditSession, TodoList};
pub use view_model::TodoViewModel;
