//! In-memory adapters used by tests and the command-line driver.

mod alert;
mod document;

pub use alert::RecordingAlert;
pub use document::MemoryDocument;
