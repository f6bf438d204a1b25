//! Project records and the store that owns them.
//!
//! The project context keeps the single authoritative collection of projects
//! and fans every change out to subscribed views. It follows the same split
//! as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - The authoritative store and its subscription registry in [`store`]
//! - Pure field validation in [`validation`]

pub mod domain;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;
