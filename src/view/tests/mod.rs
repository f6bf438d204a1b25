//! Unit tests for the view context.


use crate::board::install_page;
use crate::view::adapters::MemoryDocument;
use crate::view::ports::SharedDocument;
use std::cell::RefCell;
use std::rc::Rc;

/// Empty in-memory document.
pub(super) fn blank_document() -> SharedDocument {
    Rc::new(RefCell::new(MemoryDocument::new()))
}

/// Document with the default fragments and the application host.
pub(super) fn page() -> SharedDocument {
    let document = blank_document();
    install_page(&mut *document.borrow_mut()).expect("page installs");
    document
}
