//! Subscription registry for store change notifications.

use crate::project::domain::Project;
use std::fmt;
use std::rc::Rc;

/// Independent copy of the project collection handed to subscribers.
pub type Snapshot = Vec<Project>;

/// Callback invoked with a fresh snapshot after every store change.
pub type Listener = Rc<dyn Fn(Snapshot)>;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Listeners kept in registration order.
#[derive(Default)]
pub(super) struct SubscriptionRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl SubscriptionRegistry {
    pub(super) fn register(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clones the current listeners so they can run without the registry
    /// borrowed.
    pub(super) fn listeners(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}
