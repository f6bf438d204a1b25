//! The single owner of the board's project collection.
//!
//! # Invariants
//! - At most one project per identifier; insertion order is creation order.
//! - Every read and every notification hands out an independent copy.
//! - Listeners run synchronously, in registration order, after the mutation
//!   that triggered them and with no store borrow held, so a listener may
//!   read from or write to the store again.

use super::subscription::{Listener, Snapshot, SubscriptionId, SubscriptionRegistry};
use crate::project::domain::{Project, ProjectId, ProjectStatus};
use log::debug;
use mockable::{Clock, DefaultClock};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Result of a status move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The project changed status and subscribers were notified.
    Moved,
    /// The project already had the requested status.
    Unchanged,
    /// No project with that identifier exists.
    NotFound,
}

#[derive(Default)]
struct StoreState {
    projects: Vec<Project>,
    subscriptions: SubscriptionRegistry,
}

/// Shared handle to the authoritative project collection.
///
/// Cloning the handle shares the same collection; construct one store per
/// board and pass it to every view that needs it.
#[derive(Clone)]
pub struct ProjectStore {
    state: Rc<RefCell<StoreState>>,
    clock: Rc<dyn Clock>,
}

impl ProjectStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Rc::new(DefaultClock))
    }

    /// Creates an empty store stamping projects with `clock`.
    #[must_use]
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            state: Rc::new(RefCell::new(StoreState::default())),
            clock,
        }
    }

    /// Appends a new active project and notifies every subscriber.
    ///
    /// Input is not validated here; callers validate first.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people, &*self.clock);
        let id = project.id();
        let total = {
            let mut state = self.state.borrow_mut();
            state.projects.push(project);
            state.projects.len()
        };
        debug!("event=project_added module=store id={id} total={total}");
        self.notify();
        id
    }

    /// Moves a project to `status`.
    ///
    /// Unknown identifiers and moves to the current status are no-ops and do
    /// not notify subscribers.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> MoveOutcome {
        let outcome = {
            let mut state = self.state.borrow_mut();
            state
                .projects
                .iter_mut()
                .find(|project| project.id() == id)
                .map_or(MoveOutcome::NotFound, |project| {
                    if project.transition_to(status) {
                        MoveOutcome::Moved
                    } else {
                        MoveOutcome::Unchanged
                    }
                })
        };

        if outcome == MoveOutcome::Moved {
            debug!("event=project_moved module=store id={id} status={status}");
            self.notify();
        }
        outcome
    }

    /// Registers `listener` to run after every change.
    pub fn subscribe(&self, listener: impl Fn(Snapshot) + 'static) -> SubscriptionId {
        let shared: Listener = Rc::new(listener);
        let id = self.state.borrow_mut().subscriptions.register(shared);
        debug!("event=subscribed module=store subscription={id}");
        id
    }

    /// Removes a listener. Returns `false` when the handle was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.state.borrow_mut().subscriptions.remove(id);
        if removed {
            debug!("event=unsubscribed module=store subscription={id}");
        }
        removed
    }

    /// Returns a copy of the whole collection in creation order.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().projects.clone()
    }

    /// Returns a copy of the projects currently in `status`.
    #[must_use]
    pub fn partition(&self, status: ProjectStatus) -> Snapshot {
        self.state
            .borrow()
            .projects
            .iter()
            .filter(|project| project.status() == status)
            .cloned()
            .collect()
    }

    /// Returns a copy of one project.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.state
            .borrow()
            .projects
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().projects.len()
    }

    /// Returns whether the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().projects.is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscriptions.len()
    }

    fn notify(&self) {
        let listeners = self.state.borrow().subscriptions.listeners();
        for listener in listeners {
            // Each listener gets its own copy, taken after earlier listeners ran.
            let snapshot = self.snapshot();
            listener(snapshot);
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ProjectStore")
            .field("projects", &state.projects)
            .field("subscribers", &state.subscriptions.len())
            .finish_non_exhaustive()
    }
}
