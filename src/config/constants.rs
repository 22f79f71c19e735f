use std::time::Duration;

/// Base address of the todo service when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

pub const LOG_FILE_PATH: &str = "/tmp/todo.log";

pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / 30); // 30 fps

pub const NOTICE_DURATION: Duration = Duration::from_secs(4);
