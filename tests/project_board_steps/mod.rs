//! Step definitions for project board behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
