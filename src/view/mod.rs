//! View components and the document they render into.
//!
//! Views mount fragments into a [`ports::Document`], react to store changes
//! and translate user gestures into store commands. The module follows the
//! same hexagonal split as the project context:
//!
//! - Node, fragment and event types in [`domain`]
//! - Port contracts for the document and user alerts in [`ports`]
//! - In-memory adapters and the gesture driver in [`adapters`]
//! - Concrete views in [`components`]

pub mod adapters;
pub mod components;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
