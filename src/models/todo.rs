use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo. Opaque to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    #[serde(default)]
    pub status: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, task: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            status: false,
        }
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn done(&self) -> bool {
        self.status
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.status { 'x' } else { ' ' };
        write!(f, "{:>4}  [{}] {}", self.id, mark, self.task)
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub task: String,
    pub status: bool,
}

impl NewTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: false,
        }
    }
}
