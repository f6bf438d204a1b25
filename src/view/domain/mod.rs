//! Domain types for documents, fragments and events.

mod error;
mod event;
mod node;

pub use error::ViewError;
pub use event::{DataTransfer, DomEvent, DropEffect, EventKind, PLAIN_TEXT};
pub use node::{InsertPosition, NodeId, NodeSpec};
