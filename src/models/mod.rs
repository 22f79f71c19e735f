pub mod action;
pub mod error;
pub mod event;
pub mod notice;
pub mod todo;

pub use action::Action;
pub use error::{BackendError, TodoError};
pub use event::{Event, Outcome};
pub use notice::*;
pub use todo::{NewTodo, Todo, TodoId};
