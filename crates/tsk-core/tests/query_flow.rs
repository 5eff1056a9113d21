//! End-to-end tests for the query flow: parse the arguments, merge the
//! standing context, filter a stored task set.

use tempfile::tempdir;
use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_PENDING};
use tsk_core::{parse_cmd_line, ContextConflict, Task, TaskSet, TaskStore};
use uuid::Uuid;

fn task(summary: &str, tags: &[&str], project: &str) -> Task {
    Task {
        uuid: Uuid::new_v4().to_string(),
        status: STATUS_PENDING.to_string(),
        summary: summary.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        project: project.to_string(),
        created: Some(chrono::Utc::now()),
        ..Task::default()
    }
}

fn stored_set(store: &TaskStore) -> TaskSet {
    let mut set = TaskSet::new();
    set.add_task(task("renew the cert", &["ops"], "acme"))
        .expect("failed to add");
    set.add_task(task("write the offsite invite", &["ops", "social"], "acme"))
        .expect("failed to add");
    set.add_task(task("water the roses", &["garden"], "home"))
        .expect("failed to add");
    store.save(&mut set).expect("failed to save");
    store
        .load_task_set(NON_RESOLVED_STATUSES)
        .expect("failed to load")
}

#[test]
fn test_context_narrows_a_plain_listing() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(dir.path());
    let set = stored_set(&store);

    let context = parse_cmd_line(["project:acme", "+ops"]);
    let mut cmd_line = parse_cmd_line(["next"]);
    cmd_line.merge_context(&context).expect("merge should work");

    let matched = set.filter(&cmd_line);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|t| t.project == "acme"));
}

#[test]
fn test_command_attributes_stack_onto_the_context() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(dir.path());
    let set = stored_set(&store);

    let context = parse_cmd_line(["project:acme"]);
    let mut cmd_line = parse_cmd_line(["next", "+social"]);
    cmd_line.merge_context(&context).expect("merge should work");

    let matched = set.filter(&cmd_line);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].summary, "write the offsite invite");
}

#[test]
fn test_id_selection_pierces_the_context() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = TaskStore::with_root(dir.path());
    let set = stored_set(&store);

    let roses_id = set
        .tasks()
        .iter()
        .find(|t| t.summary == "water the roses")
        .map(|t| t.id)
        .expect("task should be loaded");

    // The context excludes the home project, but an explicit ID wins.
    let context = parse_cmd_line(["-project:home"]);
    let mut cmd_line = parse_cmd_line([roses_id.to_string()]);
    cmd_line.merge_context(&context).expect("merge should work");

    let matched = set.filter(&cmd_line);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].summary, "water the roses");
}

#[test]
fn test_conflicting_projects_stop_the_flow() {
    let context = parse_cmd_line(["project:acme"]);
    let mut cmd_line = parse_cmd_line(["next", "project:home"]);
    assert_eq!(
        cmd_line.merge_context(&context),
        Err(ContextConflict::project("home", "acme"))
    );
}
