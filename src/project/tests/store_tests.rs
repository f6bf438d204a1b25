//! Store tests covering notification fan-out and move semantics.

use super::FixedClock;
use crate::project::domain::{ProjectId, ProjectStatus};
use crate::project::store::{MoveOutcome, ProjectStore, Snapshot};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

#[fixture]
fn store() -> ProjectStore {
    ProjectStore::with_clock(Rc::new(FixedClock::at_epoch_offset(1_700_000_000)))
}

/// Records every snapshot a subscriber receives.
fn recorder(store: &ProjectStore) -> Rc<RefCell<Vec<Snapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
    seen
}

#[rstest]
fn add_project_appends_active_project_and_notifies(store: ProjectStore) {
    let seen = recorder(&store);

    let id = store.add_project("Build API", "Design REST endpoints", 3);

    assert_eq!(store.len(), 1);
    let project = store.get(id).expect("project stored");
    assert_eq!(project.status(), ProjectStatus::Active);
    assert_eq!(project.people(), 3);

    let notifications = seen.borrow();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications.first(), Some(&vec![project]));
}

#[rstest]
fn projects_keep_creation_order(store: ProjectStore) {
    let first = store.add_project("One", "first project", 2);
    let second = store.add_project("Two", "second project", 3);
    let third = store.add_project("Three", "third project", 4);

    let ids: Vec<ProjectId> = store.snapshot().iter().map(|project| project.id()).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[rstest]
fn move_project_changes_status_and_notifies(store: ProjectStore) {
    let id = store.add_project("Build API", "Design REST endpoints", 3);
    let seen = recorder(&store);

    assert_eq!(
        store.move_project(id, ProjectStatus::Finished),
        MoveOutcome::Moved
    );

    let status = store.get(id).map(|project| project.status());
    assert_eq!(status, Some(ProjectStatus::Finished));
    assert_eq!(seen.borrow().len(), 1);
}

#[rstest]
fn repeated_move_is_idempotent_and_silent(store: ProjectStore) {
    let id = store.add_project("Build API", "Design REST endpoints", 3);
    store.move_project(id, ProjectStatus::Finished);
    let after_first = store.snapshot();
    let seen = recorder(&store);

    assert_eq!(
        store.move_project(id, ProjectStatus::Finished),
        MoveOutcome::Unchanged
    );
    assert_eq!(store.snapshot(), after_first);
    assert!(seen.borrow().is_empty());
}

#[rstest]
fn moving_unknown_id_is_a_silent_no_op(store: ProjectStore) {
    store.add_project("Build API", "Design REST endpoints", 3);
    let before = store.snapshot();
    let seen = recorder(&store);

    assert_eq!(
        store.move_project(ProjectId::new(), ProjectStatus::Finished),
        MoveOutcome::NotFound
    );
    assert_eq!(store.snapshot(), before);
    assert!(seen.borrow().is_empty());
}

#[rstest]
fn subscribers_run_in_registration_order(store: ProjectStore) {
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        store.subscribe(move |_| sink.borrow_mut().push(name));
    }

    store.add_project("Build API", "Design REST endpoints", 3);

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[rstest]
fn snapshots_are_independent_copies(store: ProjectStore) {
    let id = store.add_project("Build API", "Design REST endpoints", 3);
    let tampered = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&tampered);
    store.subscribe(move |mut snapshot| {
        snapshot.clear();
        *sink.borrow_mut() = Some(snapshot.len());
    });

    store.move_project(id, ProjectStatus::Finished);

    assert_eq!(*tampered.borrow(), Some(0));
    assert_eq!(store.len(), 1);

    let mut copy = store.snapshot();
    copy.clear();
    assert_eq!(store.len(), 1);
}

#[rstest]
fn each_subscriber_gets_its_own_snapshot(store: ProjectStore) {
    let lengths = Rc::new(RefCell::new(Vec::new()));
    let truncating = Rc::clone(&lengths);
    store.subscribe(move |mut snapshot| {
        snapshot.truncate(0);
        truncating.borrow_mut().push(snapshot.len());
    });
    let observing = Rc::clone(&lengths);
    store.subscribe(move |snapshot| observing.borrow_mut().push(snapshot.len()));

    store.add_project("Build API", "Design REST endpoints", 3);

    assert_eq!(*lengths.borrow(), vec![0, 1]);
}

#[rstest]
fn unsubscribed_listener_is_not_called(store: ProjectStore) {
    let calls = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&calls);
    let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.add_project("One", "first project", 2);
    assert!(store.unsubscribe(subscription));
    store.add_project("Two", "second project", 3);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
    assert!(!store.unsubscribe(subscription));
}

#[rstest]
fn listener_may_write_back_to_the_store(store: ProjectStore) {
    let writer = store.clone();
    store.subscribe(move |snapshot| {
        for project in snapshot {
            writer.move_project(project.id(), ProjectStatus::Finished);
        }
    });

    let id = store.add_project("Build API", "Design REST endpoints", 3);

    let status = store.get(id).map(|project| project.status());
    assert_eq!(status, Some(ProjectStatus::Finished));
}

#[rstest]
fn partitions_cover_the_collection_without_overlap(store: ProjectStore) {
    let ids: Vec<ProjectId> = (1..=5)
        .map(|n| store.add_project(format!("Project {n}"), "some description", n))
        .collect();
    for id in ids.iter().step_by(2) {
        store.move_project(*id, ProjectStatus::Finished);
    }

    let active = store.partition(ProjectStatus::Active);
    let finished = store.partition(ProjectStatus::Finished);

    assert_eq!(active.len() + finished.len(), store.len());
    assert!(active.iter().all(|project| !finished.contains(project)));
    assert!(
        store
            .snapshot()
            .iter()
            .all(|project| active.contains(project) || finished.contains(project))
    );
}

#[rstest]
fn clones_share_one_collection(store: ProjectStore) {
    let other = store.clone();
    other.add_project("Build API", "Design REST endpoints", 3);

    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
}
