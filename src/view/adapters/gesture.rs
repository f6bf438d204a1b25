//! Drives pointer gestures through document dispatch.
//!
//! A drag follows the browser sequence: `dragstart` on the source, any
//! number of `dragover`/`dragleave` on targets, `drop` only when the target
//! accepted the last `dragover`, and finally `dragend` on the source. One
//! [`DataTransfer`] is shared by every event of the gesture.

use crate::view::{
    domain::{DataTransfer, DomEvent, EventKind, NodeId},
    ports::{SharedDocument, dispatch},
};

/// How a drag gesture finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target accepted the payload and received a `drop`.
    Dropped,
    /// The target never accepted the payload; no `drop` was delivered.
    Rejected,
}

/// An in-flight drag gesture.
pub struct DragGesture {
    document: SharedDocument,
    source: Option<NodeId>,
    data_transfer: DataTransfer,
    accepted_by: Option<NodeId>,
}

impl DragGesture {
    /// Starts dragging `source`.
    ///
    /// Returns `None` when a `dragstart` listener cancelled the gesture.
    #[must_use]
    pub fn start(document: &SharedDocument, source: NodeId) -> Option<Self> {
        let mut event = DomEvent::with_data_transfer(EventKind::DragStart, DataTransfer::new());
        if !dispatch(document, source, &mut event) {
            return None;
        }
        Some(Self {
            document: SharedDocument::clone(document),
            source: Some(source),
            data_transfer: event.into_data_transfer().unwrap_or_default(),
            accepted_by: None,
        })
    }

    /// Starts a gesture that originated outside the document.
    #[must_use]
    pub fn foreign(document: &SharedDocument, data_transfer: DataTransfer) -> Self {
        Self {
            document: SharedDocument::clone(document),
            source: None,
            data_transfer,
            accepted_by: None,
        }
    }

    /// Returns the payload carried by the gesture.
    #[must_use]
    pub const fn data_transfer(&self) -> &DataTransfer {
        &self.data_transfer
    }

    /// Drags over `target`. Returns whether the target accepts a drop.
    pub fn over(&mut self, target: NodeId) -> bool {
        let mut event = self.event(EventKind::DragOver);
        dispatch(&self.document, target, &mut event);
        let accepted = event.default_prevented();
        self.accepted_by = accepted.then_some(target);
        accepted
    }

    /// Leaves `target` without dropping.
    pub fn leave(&mut self, target: NodeId) {
        let mut event = self.event(EventKind::DragLeave);
        dispatch(&self.document, target, &mut event);
        if self.accepted_by == Some(target) {
            self.accepted_by = None;
        }
    }

    /// Releases the payload over `target` and ends the gesture.
    pub fn drop_on(mut self, target: NodeId) -> DropOutcome {
        if self.accepted_by != Some(target) {
            self.leave(target);
            self.finish();
            return DropOutcome::Rejected;
        }
        let mut event = self.event(EventKind::Drop);
        dispatch(&self.document, target, &mut event);
        self.finish();
        DropOutcome::Dropped
    }

    /// Abandons the gesture without dropping.
    pub fn cancel(self) {
        self.finish();
    }

    fn event(&self, kind: EventKind) -> DomEvent {
        DomEvent::with_data_transfer(kind, self.data_transfer.clone())
    }

    fn finish(&self) {
        if let Some(source) = self.source {
            let mut event = self.event(EventKind::DragEnd);
            dispatch(&self.document, source, &mut event);
        }
    }
}

/// Drags `source` onto `target` through the full gesture.
#[must_use]
pub fn drag_and_drop(document: &SharedDocument, source: NodeId, target: NodeId) -> DropOutcome {
    let Some(mut gesture) = DragGesture::start(document, source) else {
        return DropOutcome::Rejected;
    };
    gesture.over(target);
    gesture.drop_on(target)
}

/// Submits `form`. Returns `false` when a listener suppressed the default
/// submission.
#[must_use]
pub fn submit(document: &SharedDocument, form: NodeId) -> bool {
    let mut event = DomEvent::new(EventKind::Submit);
    dispatch(document, form, &mut event)
}
