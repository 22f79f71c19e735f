use super::*;
use crate::models::TodoId;

#[test]
fn test_from_todo_error() {
    let notice = NoticeMessage::from(&TodoError::NotFound(TodoId::new(3)));
    assert_eq!(notice.kind(), NoticeKind::Error);
    assert_eq!(notice.text(), "Todo 3 no longer exists, press r to reload");

    let notice = NoticeMessage::from(&TodoError::Backend(BackendError::Network(
        "connection refused".to_string(),
    )));
    assert_eq!(notice.text(), "Cannot reach the todo service");

    let notice = NoticeMessage::from(&TodoError::Backend(BackendError::Status {
        status: 500,
        body: "database is locked".to_string(),
    }));
    assert_eq!(notice.text(), "Server error 500: database is locked");

    let notice = NoticeMessage::from(&TodoError::Backend(BackendError::Status {
        status: 502,
        body: String::new(),
    }));
    assert_eq!(notice.text(), "Server error 502");
}

#[test]
fn test_ttl() {
    let notice = NoticeMessage::info("Task deleted");
    assert_eq!(notice.kind(), NoticeKind::Info);
    assert_eq!(notice.ttl(), None);

    let notice = notice.with_ttl(Duration::from_secs(1));
    assert_eq!(notice.ttl(), Some(Duration::from_secs(1)));
}
