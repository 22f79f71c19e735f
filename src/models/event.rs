use tui_textarea::Input;

use super::{BackendError, NoticeMessage, Todo, TodoId};

/// Result of a request, tagged with the record it concerns.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded(Result<Vec<Todo>, BackendError>),
    Created(Result<Todo, BackendError>),
    Toggled(TodoId, Result<Todo, BackendError>),
    Saved(TodoId, Result<Todo, BackendError>),
    Deleted(TodoId, Result<(), BackendError>),
}

#[derive(Debug)]
pub enum Event {
    Notice(NoticeMessage),

    Backend(Outcome),

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardTab,
    KeyboardCtrlC,
    KeyboardPaste(String),

    Quit,

    UiTick,
    UiUp,
    UiDown,
}
