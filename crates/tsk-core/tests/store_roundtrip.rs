//! Integration tests for TaskStore.
//!
//! These tests drive the store the way commands do: load a task set,
//! mutate it, save it and load it again.

use tempfile::tempdir;
use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_PENDING, STATUS_RESOLVED};
use tsk_core::{parse_cmd_line, State, Task, TaskSet, TaskStore};
use uuid::Uuid;

fn new_task(summary: &str) -> Task {
    Task {
        uuid: Uuid::new_v4().to_string(),
        status: STATUS_PENDING.to_string(),
        summary: summary.to_string(),
        created: Some(chrono::Utc::now()),
        ..Task::default()
    }
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    let mut task = new_task("water the roses");
    task.tags = vec!["garden".to_string()];
    task.project = "home".to_string();
    let uuid = task.uuid.clone();
    set.add_task(task).expect("failed to add task");

    let written = store.save(&mut set).expect("failed to save task set");
    assert_eq!(written, 1);

    let loaded = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load task set");
    let task = loaded.task_by_uuid(&uuid).expect("task should be loaded");
    assert_eq!(task.summary, "water the roses");
    assert_eq!(task.tags, vec!["garden"]);
    assert_eq!(task.project, "home");
    assert_eq!(task.status, STATUS_PENDING);
    assert_eq!(task.id, 1);
    // Normalisation filled in the default priority before the write.
    assert_eq!(task.priority, "P2");
    assert!(!task.write_pending);
}

#[test]
fn test_save_writes_only_pending_tasks() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    set.add_task(new_task("one")).expect("failed to add");
    set.add_task(new_task("two")).expect("failed to add");
    assert_eq!(store.save(&mut set).expect("failed to save"), 2);

    // Nothing changed, nothing to write.
    assert_eq!(store.save(&mut set).expect("failed to save"), 0);
}

#[test]
fn test_resolving_moves_the_file_and_drops_the_id() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    let uuid = set
        .add_task(new_task("finish the report"))
        .expect("failed to add")
        .uuid
        .clone();
    store.save(&mut set).expect("failed to save");

    let mut set = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load");
    let mut task = set
        .task_by_uuid(&uuid)
        .cloned()
        .expect("task should be loaded");
    task.status = STATUS_RESOLVED.to_string();
    task.resolved = Some(chrono::Utc::now());
    set.upsert_task(task).expect("failed to update");
    store.save(&mut set).expect("failed to save");

    // Gone from the ID-bearing statuses, present among the resolved.
    let open = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load");
    assert!(open.task_by_uuid(&uuid).is_none());

    let resolved = store
        .load_task_set(&[STATUS_RESOLVED])
        .expect("failed to load");
    let task = resolved.task_by_uuid(&uuid).expect("task should be loaded");
    assert_eq!(task.id, 0, "resolved tasks must not keep a short ID");
    assert!(task.resolved.is_some());
}

#[test]
fn test_ids_are_stable_across_reloads() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    for summary in ["a", "b", "c"] {
        set.add_task(new_task(summary)).expect("failed to add");
    }
    store.save(&mut set).expect("failed to save");

    let first: Vec<(i64, String)> = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load")
        .tasks()
        .iter()
        .map(|t| (t.id, t.summary.clone()))
        .collect();
    let second: Vec<(i64, String)> = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load")
        .tasks()
        .iter()
        .map(|t| (t.id, t.summary.clone()))
        .collect();
    assert_eq!(first, second, "the same numeral must name the same task");
}

#[test]
fn test_deleted_task_stays_gone() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    let uuid = set
        .add_task(new_task("never mind"))
        .expect("failed to add")
        .uuid
        .clone();
    store.save(&mut set).expect("failed to save");

    let mut set = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load");
    let task = set.remove_task(&uuid).expect("task should be loaded");
    store.delete_task(&task).expect("failed to delete");

    let reloaded = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load");
    assert!(reloaded.task_by_uuid(&uuid).is_none());
}

#[test]
fn test_state_roundtrip_keeps_the_context() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let state = State {
        context: parse_cmd_line(["+work", "-blocked", "project:acme"]),
    };
    store.save_state(&state).expect("failed to save state");

    let loaded = store.load_state().expect("failed to load state");
    assert_eq!(loaded.context, state.context);
    assert_eq!(loaded.context.to_string(), "+work -blocked project:acme");
}

#[test]
fn test_filtering_a_loaded_set() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(temp_dir.path());

    let mut set = TaskSet::new();
    let mut urgent = new_task("pay the invoice");
    urgent.priority = "P0".to_string();
    urgent.tags = vec!["money".to_string()];
    set.add_task(urgent).expect("failed to add");
    set.add_task(new_task("sweep the floor")).expect("failed to add");
    store.save(&mut set).expect("failed to save");

    let loaded = store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load");
    let matched = loaded.filter(&parse_cmd_line(["+money"]));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].summary, "pay the invoice");

    let all = loaded.filter(&parse_cmd_line(["invoice"]));
    assert_eq!(all.len(), 1, "free text should match the summary");
}
