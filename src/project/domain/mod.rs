//! Domain model for projects shown on the board.
//!
//! Projects are created once and then only ever change status. All other
//! fields are fixed at creation time.

mod error;
mod ids;
mod project;

pub use error::{ParseProjectIdError, ParseProjectStatusError};
pub use ids::ProjectId;
pub use project::{Project, ProjectStatus};
