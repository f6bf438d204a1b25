//! Port contracts for the view layer.
//!
//! Ports define the page primitives views rely on without tying them to a
//! particular document implementation.

pub mod alert;
pub mod document;

pub use alert::Alert;
pub use document::{Document, EventHandler, SharedDocument, dispatch};
