use std::sync::Arc;

use crate::backend::MockTodoBackend;
use crate::models::{BackendError, NewTodo, Todo, TodoId};

use super::*;

fn with_todos(todos: Vec<Todo>) -> MockTodoBackend {
    let mut backend = MockTodoBackend::new();
    backend
        .expect_list_todos()
        .times(1)
        .returning(move || Ok(todos.clone()));
    backend
}

async fn run(command: TodoCommand, backend: MockTodoBackend) -> (Result<()>, String) {
    let mut out = Vec::new();
    let res = run_command(&command, Arc::new(backend), &mut out).await;
    (res, String::from_utf8(out).expect("output is utf-8"))
}

#[tokio::test]
async fn test_list() {
    let backend = with_todos(vec![
        Todo::new(1, "buy milk"),
        Todo::new(2, "walk the dog").with_status(true),
    ]);

    let (res, out) = run(TodoCommand::List, backend).await;
    res.expect("list should succeed");
    assert_eq!(out, "   1  [ ] buy milk\n   2  [x] walk the dog\n");
}

#[tokio::test]
async fn test_list_empty() {
    let (res, out) = run(TodoCommand::List, with_todos(vec![])).await;
    res.expect("list should succeed");
    assert_eq!(out, "Nothing to do.\n");
}

#[tokio::test]
async fn test_show() {
    let mut backend = MockTodoBackend::new();
    backend
        .expect_get_todo()
        .times(1)
        .withf(|id| *id == TodoId::new(4))
        .returning(|_| Ok(Todo::new(4, "call mom")));

    let (res, out) = run(
        TodoCommand::Show {
            id: TodoId::new(4),
        },
        backend,
    )
    .await;
    res.expect("show should succeed");
    assert_eq!(out, "   4  [ ] call mom\n");
}

#[tokio::test]
async fn test_add_joins_words() {
    let mut backend = MockTodoBackend::new();
    backend.expect_list_todos().never();
    backend
        .expect_create_todo()
        .times(1)
        .withf(|todo| *todo == NewTodo::new("buy oat milk"))
        .returning(|todo| Ok(Todo::new(12, todo.task)));

    let task = ["buy", "oat", "milk"].map(String::from).to_vec();
    let (res, out) = run(TodoCommand::Add { task }, backend).await;
    res.expect("add should succeed");
    assert_eq!(out, "Added 12  [ ] buy oat milk\n");
}

#[tokio::test]
async fn test_add_blank_fails() {
    let mut backend = MockTodoBackend::new();
    backend.expect_create_todo().never();

    let task = vec!["  ".to_string()];
    let (res, out) = run(TodoCommand::Add { task }, backend).await;
    assert!(res.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_toggle() {
    let mut backend = with_todos(vec![Todo::new(3, "write report")]);
    backend
        .expect_update_todo()
        .times(1)
        .withf(|todo| *todo == Todo::new(3, "write report").with_status(true))
        .returning(Ok);

    let (res, out) = run(
        TodoCommand::Toggle {
            id: TodoId::new(3),
        },
        backend,
    )
    .await;
    res.expect("toggle should succeed");
    assert_eq!(out, "3  [x] write report\n");
}

#[tokio::test]
async fn test_toggle_unknown_id() {
    let mut backend = with_todos(vec![Todo::new(3, "write report")]);
    backend.expect_update_todo().never();

    let (res, _) = run(
        TodoCommand::Toggle {
            id: TodoId::new(8),
        },
        backend,
    )
    .await;
    let err = res.unwrap_err();
    assert!(format!("{err:?}").contains("todo 8 not found"));
}

#[tokio::test]
async fn test_edit() {
    let mut backend = with_todos(vec![Todo::new(5, "old text").with_status(true)]);
    backend
        .expect_update_todo()
        .times(1)
        .withf(|todo| *todo == Todo::new(5, "new text").with_status(true))
        .returning(Ok);

    let task = ["new", "text"].map(String::from).to_vec();
    let (res, out) = run(
        TodoCommand::Edit {
            id: TodoId::new(5),
            task,
        },
        backend,
    )
    .await;
    res.expect("edit should succeed");
    assert_eq!(out, "5  [x] new text\n");
}

#[tokio::test]
async fn test_delete() {
    let mut backend = with_todos(vec![Todo::new(1, "buy milk"), Todo::new(2, "walk")]);
    backend
        .expect_delete_todo()
        .times(1)
        .withf(|id| *id == TodoId::new(2))
        .returning(|_| Ok(()));

    let (res, out) = run(
        TodoCommand::Delete {
            id: TodoId::new(2),
        },
        backend,
    )
    .await;
    res.expect("delete should succeed");
    assert_eq!(out, "Deleted 2\n");
}

#[tokio::test]
async fn test_delete_server_error() {
    let mut backend = with_todos(vec![Todo::new(1, "buy milk")]);
    backend.expect_delete_todo().times(1).returning(|_| {
        Err(BackendError::Status {
            status: 500,
            body: "database is locked".to_string(),
        })
    });

    let (res, out) = run(
        TodoCommand::Delete {
            id: TodoId::new(1),
        },
        backend,
    )
    .await;
    assert!(res.is_err());
    assert!(out.is_empty());
}
