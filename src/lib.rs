//! Projboard: a reactive project board.
//!
//! Users create projects through a form and move them between an "active"
//! and a "finished" list by dragging cards. A single store owns every
//! project and pushes a fresh snapshot to each subscribed view on change;
//! views rebuild their content from that snapshot.
//!
//! # Architecture
//!
//! Projboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Trait seams for the page document and user alerts
//! - **Adapters**: An in-memory document, alert recorders and the gesture
//!   driver
//!
//! # Modules
//!
//! - [`project`]: Project model, reactive store and input validation
//! - [`view`]: Document port, views and drag gestures
//! - [`board`]: Bootstrap wiring one store to the form and both lists
//! - [`config`]: Label templates and form rules
//! - [`logging`]: Process-wide logger setup
//!
//! # Example
//!
//! ```
//! use projboard::board::Board;
//! use projboard::config::BoardConfig;
//! use projboard::project::{domain::ProjectStatus, store::ProjectStore};
//! use projboard::view::adapters::{MemoryDocument, RecordingAlert};
//! use projboard::view::ports::SharedDocument;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let document: SharedDocument = Rc::new(RefCell::new(MemoryDocument::new()));
//! let board = Board::new(
//!     &document,
//!     ProjectStore::new(),
//!     Rc::new(RecordingAlert::new()),
//!     &BoardConfig::default(),
//! )
//! .expect("board mounts");
//!
//! assert!(board.submit_project("Build API", "Design REST endpoints", "3").expect("form present"));
//! assert_eq!(board.list(ProjectStatus::Active).card_count(), 1);
//! ```

pub mod board;
pub mod config;
pub mod logging;
pub mod project;
pub mod view;
