#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;

use std::time::Duration;

use ratatui::style::Color;

use super::{BackendError, TodoError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

impl NoticeKind {
    pub fn border_color(&self) -> Color {
        match self {
            NoticeKind::Info => Color::Rgb(30, 136, 229),
            NoticeKind::Error => Color::Rgb(211, 47, 47),
        }
    }

    pub fn text_color(&self) -> Color {
        match self {
            NoticeKind::Info => Color::Rgb(144, 202, 249),
            NoticeKind::Error => Color::Rgb(255, 138, 128),
        }
    }
}

/// Short user-facing message shown in the corner of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    text: String,
    kind: NoticeKind,
    ttl: Option<Duration>,
}

impl NoticeMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
            ttl: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            ttl: None,
        }
    }

    /// Keeps the notice on screen for `ttl` instead of the default duration.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl From<&TodoError> for NoticeMessage {
    fn from(err: &TodoError) -> Self {
        let text = match err {
            TodoError::NotFound(id) => format!("Todo {id} no longer exists, press r to reload"),
            TodoError::NotEditing(id) => format!("Todo {id} is not being edited"),
            TodoError::Backend(BackendError::Network(_)) => {
                "Cannot reach the todo service".to_string()
            }
            TodoError::Backend(BackendError::Status { status, body }) if body.is_empty() => {
                format!("Server error {status}")
            }
            TodoError::Backend(BackendError::Status { status, body }) => {
                format!("Server error {status}: {body}")
            }
            TodoError::Backend(BackendError::Malformed(_)) => {
                "Unexpected response from the todo service".to_string()
            }
        };
        NoticeMessage::error(text)
    }
}
