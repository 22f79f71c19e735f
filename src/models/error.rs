use thiserror::Error;

use super::TodoId;

/// Failure talking to the todo service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never got a response: connection refused, DNS failure,
    /// timeout.
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but is not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("todo {0} is not being edited")]
    NotEditing(TodoId),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Network(_) => "network",
            BackendError::Status { .. } => "status",
            BackendError::Malformed(_) => "malformed",
        }
    }
}
