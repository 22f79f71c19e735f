use crate::models::{BackendError, NewTodo};

use super::*;

fn sample() -> TodoList {
    TodoList::new().with_todos(vec![
        Todo::new(1, "buy milk"),
        Todo::new(2, "walk the dog").with_status(true),
        Todo::new(3, "write report"),
    ])
}

fn network_error() -> BackendError {
    BackendError::Network("connection refused".to_string())
}

#[test]
fn test_load_replaces_collection_in_order() {
    let mut list = TodoList::new().with_todos(vec![Todo::new(42, "stale")]);

    let action = list.begin_load();
    assert_eq!(action, Action::LoadTodos);
    assert!(list.loading());

    let todos = vec![
        Todo::new(5, "e"),
        Todo::new(2, "b"),
        Todo::new(9, "i").with_status(true),
    ];
    list.apply(Outcome::Loaded(Ok(todos.clone())))
        .expect("load should succeed");

    assert!(!list.loading());
    assert_eq!(list.todos(), todos.as_slice());
}

#[test]
fn test_load_failure_empties_collection() {
    let mut list = sample();
    list.begin_load();

    let err = list
        .apply(Outcome::Loaded(Err(BackendError::Malformed(
            "expected a list of todos, got null".to_string(),
        ))))
        .unwrap_err();

    assert!(matches!(err, TodoError::Backend(BackendError::Malformed(_))));
    assert!(list.is_empty());
    assert!(!list.loading());
}

#[test]
fn test_add_blank_input_sends_nothing() {
    let mut list = sample();
    list.set_input("");
    assert_eq!(list.begin_add(), None);

    list.set_input("   \t ");
    assert_eq!(list.begin_add(), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_add_appends_server_record_and_clears_input() {
    let mut list = sample();
    list.set_input("  buy bread ");

    let action = list.begin_add().expect("should produce a request");
    assert_eq!(action, Action::CreateTodo(NewTodo::new("buy bread")));

    list.apply(Outcome::Created(Ok(Todo::new(7, "buy bread"))))
        .expect("create should succeed");

    assert_eq!(list.len(), 4);
    assert_eq!(list.todos().last(), Some(&Todo::new(7, "buy bread")));
    assert_eq!(list.input(), "");
}

#[test]
fn test_add_failure_keeps_state() {
    let mut list = sample();
    list.set_input("buy bread");

    let err = list.apply(Outcome::Created(Err(network_error()))).unwrap_err();

    assert_eq!(err, TodoError::Backend(network_error()));
    assert_eq!(list.len(), 3);
    assert_eq!(list.input(), "buy bread");
}

#[test]
fn test_delete_removes_only_on_success() {
    let mut list = sample();
    let id = TodoId::new(2);

    assert_eq!(list.begin_delete(id), Ok(Action::DeleteTodo(id)));

    let err = list
        .apply(Outcome::Deleted(
            id,
            Err(BackendError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        ))
        .unwrap_err();
    assert!(matches!(err, TodoError::Backend(BackendError::Status { .. })));
    assert_eq!(list.len(), 3);

    list.apply(Outcome::Deleted(id, Ok(())))
        .expect("delete should succeed");
    assert_eq!(list.len(), 2);
    assert!(list.get(id).is_none());
}

#[test]
fn test_delete_unknown_id() {
    let list = sample();
    let id = TodoId::new(99);
    assert_eq!(list.begin_delete(id), Err(TodoError::NotFound(id)));
}

#[test]
fn test_toggle_sends_negated_record() {
    let mut list = sample();
    let id = TodoId::new(1);

    let action = list.begin_toggle(id).expect("todo exists");
    assert_eq!(
        action,
        Action::ToggleTodo(Todo::new(1, "buy milk").with_status(true))
    );
    // Nothing changes until the server confirms
    assert!(!list.get(id).unwrap().status);

    list.apply(Outcome::Toggled(id, Ok(Todo::new(1, "buy milk").with_status(true))))
        .expect("toggle should succeed");

    assert_eq!(list.get(id), Some(&Todo::new(1, "buy milk").with_status(true)));
    assert_eq!(list.get(TodoId::new(2)).map(|t| t.status), Some(true));
    assert_eq!(list.get(TodoId::new(3)).map(|t| t.status), Some(false));
}

#[test]
fn test_toggle_failure_keeps_status() {
    let mut list = sample();
    let id = TodoId::new(2);

    assert!(list.apply(Outcome::Toggled(id, Err(network_error()))).is_err());
    assert_eq!(list.get(id).map(|t| t.status), Some(true));
}

#[test]
fn test_toggle_unknown_id() {
    let list = sample();
    let id = TodoId::new(42);
    assert_eq!(list.begin_toggle(id), Err(TodoError::NotFound(id)));
}

#[test]
fn test_start_edit_replaces_session() {
    let mut list = sample();

    list.start_edit(TodoId::new(1), "buy milk").unwrap();
    list.start_edit(TodoId::new(3), "write report").unwrap();

    assert_eq!(
        list.editing(),
        Some(&EditSession {
            id: TodoId::new(3),
            draft: "write report".to_string(),
        })
    );
    assert!(!list.is_editing(TodoId::new(1)));
    assert!(list.is_editing(TodoId::new(3)));
}

#[test]
fn test_start_edit_unknown_id() {
    let mut list = sample();
    let id = TodoId::new(77);
    assert_eq!(list.start_edit(id, "nope"), Err(TodoError::NotFound(id)));
    assert_eq!(list.editing(), None);
}

#[test]
fn test_save_edit_uses_draft_and_current_status() {
    let mut list = sample();
    let id = TodoId::new(2);

    list.start_edit(id, "walk the dog").unwrap();
    list.set_draft("walk the cat");

    let action = list.begin_save_edit(id).expect("edit session is open");
    assert_eq!(
        action,
        Action::SaveTodo(Todo::new(2, "walk the cat").with_status(true))
    );

    let from_server = Todo::new(2, "walk the cat (server)").with_status(true);
    list.apply(Outcome::Saved(id, Ok(from_server.clone())))
        .expect("save should succeed");

    assert_eq!(list.get(id), Some(&from_server));
    assert_eq!(list.editing(), None);
}

#[test]
fn test_save_edit_without_session() {
    let mut list = sample();
    let id = TodoId::new(1);
    assert_eq!(list.begin_save_edit(id), Err(TodoError::NotEditing(id)));

    list.start_edit(TodoId::new(3), "write report").unwrap();
    assert_eq!(list.begin_save_edit(id), Err(TodoError::NotEditing(id)));
}

#[test]
fn test_save_edit_failure_closes_session() {
    let mut list = sample();
    let id = TodoId::new(1);
    list.start_edit(id, "buy milk").unwrap();
    list.set_draft("buy cheese");

    assert!(list.apply(Outcome::Saved(id, Err(network_error()))).is_err());

    assert_eq!(list.editing(), None);
    assert_eq!(list.get(id).map(|t| t.task.as_str()), Some("buy milk"));
}

#[test]
fn test_set_draft_without_session_is_ignored() {
    let mut list = sample();
    list.set_draft("orphan");
    assert_eq!(list.editing(), None);
}

#[test]
fn test_overlapping_toggles_settle_on_confirmed_status() {
    let mut list = sample();
    let id = TodoId::new(1);

    // Both requests are built before either is confirmed
    let first = list.begin_toggle(id).unwrap();
    let second = list.begin_toggle(id).unwrap();
    assert_eq!(first, second);

    let confirmed = Todo::new(1, "buy milk").with_status(true);
    list.apply(Outcome::Toggled(id, Ok(confirmed.clone())))
        .expect("toggle should succeed");
    list.apply(Outcome::Toggled(id, Ok(confirmed)))
        .expect("toggle should succeed");

    assert_eq!(list.get(id).map(|t| t.status), Some(true));
}

#[test]
fn test_save_edit_of_vanished_record_closes_session() {
    let mut list = sample();
    let id = TodoId::new(3);
    list.start_edit(id, "write report").unwrap();

    // Reload without the record while the popup is open
    list.begin_load();
    list.apply(Outcome::Loaded(Ok(vec![Todo::new(1, "buy milk")])))
        .unwrap();

    assert_eq!(list.begin_save_edit(id), Err(TodoError::NotFound(id)));
    assert_eq!(list.editing(), None);
    assert!(!list.is_saving(id));
}

#[test]
fn test_delete_closes_matching_session() {
    let mut list = sample();
    let id = TodoId::new(3);
    list.start_edit(id, "write report").unwrap();

    list.apply(Outcome::Deleted(TodoId::new(1), Ok(()))).unwrap();
    assert!(list.is_editing(id));

    list.apply(Outcome::Deleted(id, Ok(()))).unwrap();
    assert_eq!(list.editing(), None);
    assert_eq!(list.begin_save_edit(id), Err(TodoError::NotEditing(id)));
}

#[test]
fn test_is_saving_until_outcome() {
    let mut list = sample();
    let id = TodoId::new(1);
    list.start_edit(id, "buy milk").unwrap();
    assert!(list.is_editing(id));
    assert!(!list.is_saving(id));

    list.set_draft("buy cheese");
    list.begin_save_edit(id).unwrap();
    assert!(list.is_saving(id));

    list.apply(Outcome::Saved(id, Ok(Todo::new(1, "buy cheese"))))
        .unwrap();
    assert!(!list.is_saving(id));
    assert_eq!(list.editing(), None);
}

#[test]
fn test_overlapping_loads_keep_loading_flag() {
    let mut list = sample();
    list.begin_load();
    list.begin_load();

    list.apply(Outcome::Loaded(Ok(vec![Todo::new(1, "buy milk")])))
        .unwrap();
    assert!(list.loading());

    list.apply(Outcome::Loaded(Ok(vec![]))).unwrap();
    assert!(!list.loading());
    assert!(list.is_empty());
}
