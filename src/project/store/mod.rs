//! Authoritative project store and its subscription registry.

mod project_store;
mod subscription;

pub use project_store::{MoveOutcome, ProjectStore};
pub use subscription::{Listener, Snapshot, SubscriptionId};
