//! Adapter implementations for view ports.

pub mod gesture;
pub mod memory;
pub mod text;

pub use gesture::{DragGesture, DropOutcome, drag_and_drop, submit};
pub use memory::{MemoryDocument, RecordingAlert};
pub use text::outline;
