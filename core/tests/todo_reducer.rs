//! Given-When-Then tests for the todo reducer.

#![allow(clippy::unwrap_used)]

use tasklist_core::{TodoId, TodoReducer, TodoState};
use tasklist_testing::{assertions, fixtures, ReducerTest};

#[test]
fn test_create_todo_success() {
    ReducerTest::new(TodoReducer::new())
        .given_state(TodoState::new())
        .when_action(fixtures::create("Go shopping", "Buy items"))
        .then_state(|state| {
            assert_eq!(state.count(), 1);
            let todo = state.get(TodoId::new(1)).unwrap();
            assert_eq!(todo.title, "Go shopping");
            assert_eq!(todo.description, "Buy items");
            assert!(!todo.complete);
        })
        .then_output(assertions::assert_created)
        .run();
}

#[test]
fn test_update_empty_title_keeps_title() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("X", "old")]))
        .when_action(fixtures::update(1, "", "newDesc"))
        .then_state(|state| {
            let todo = state.get(TodoId::new(1)).unwrap();
            assert_eq!(todo.title, "X");
            assert_eq!(todo.description, "newDesc");
        })
        .then_output(assertions::assert_updated)
        .run();
}

#[test]
fn test_update_empty_description_clears_description() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("X", "old")]))
        .when_action(fixtures::update(1, "Y", ""))
        .then_state(|state| {
            let todo = state.get(TodoId::new(1)).unwrap();
            assert_eq!(todo.title, "Y");
            assert_eq!(todo.description, "");
        })
        .then_output(assertions::assert_updated)
        .run();
}

#[test]
fn test_update_not_found() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("X", "old")]))
        .when_action(fixtures::update(2, "Y", "new"))
        .then_state(|state| {
            let todo = state.get(TodoId::new(1)).unwrap();
            assert_eq!(todo.title, "X");
            assert_eq!(todo.description, "old");
        })
        .then_output(assertions::assert_not_found)
        .run();
}

#[test]
fn test_complete_is_idempotent() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("X", "old")]))
        .given_actions(vec![fixtures::complete(1)])
        .when_action(fixtures::complete(1))
        .then_state(|state| {
            assert!(state.get(TodoId::new(1)).unwrap().complete);
            assert_eq!(state.completed_count(), 1);
        })
        .then_output(assertions::assert_completed)
        .run();
}

#[test]
fn test_complete_never_created_id() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("X", "old")]))
        .when_action(fixtures::complete(42))
        .then_state(|state| {
            assert_eq!(state.count(), 1);
            assert_eq!(state.completed_count(), 0);
        })
        .then_output(assertions::assert_not_found)
        .run();
}

#[test]
fn test_delete_twice_reports_not_found_second_time() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("a", ""), ("b", "")]))
        .given_actions(vec![fixtures::delete(1)])
        .when_action(fixtures::delete(1))
        .then_state(|state| {
            assert_eq!(state.count(), 1);
            assert_eq!(state.todos()[0].id, TodoId::new(2));
        })
        .then_output(assertions::assert_not_found)
        .run();
}

#[test]
fn test_delete_preserves_order_of_remaining() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("a", ""), ("b", ""), ("c", ""), ("d", "")]))
        .when_action(fixtures::delete(2))
        .then_state(|state| {
            let titles: Vec<_> = state.todos().iter().map(|t| t.title.as_str()).collect();
            assert_eq!(titles, vec!["a", "c", "d"]);
        })
        .then_output(assertions::assert_deleted)
        .run();
}

#[test]
fn test_create_after_delete_does_not_reuse_id() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("a", ""), ("b", ""), ("c", "")]))
        .given_actions(vec![fixtures::delete(3)])
        .when_action(fixtures::create("d", ""))
        .then_state(|state| {
            let ids: Vec<_> = state.todos().iter().map(|t| t.id.get()).collect();
            assert_eq!(ids, vec![1, 2, 4]);
        })
        .then_output(|output| {
            assert_eq!(output.as_ref().unwrap().todo().id, TodoId::new(4));
        })
        .run();
}

#[test]
fn test_non_positive_ids_are_never_found() {
    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("a", "")]))
        .when_action(fixtures::delete(0))
        .then_state(|state| assert_eq!(state.count(), 1))
        .then_output(assertions::assert_not_found)
        .run();

    ReducerTest::new(TodoReducer::new())
        .given_state(fixtures::seeded_state(&[("a", "")]))
        .when_action(fixtures::complete(-1))
        .then_output(assertions::assert_not_found)
        .run();
}
