//! Document events and the drag payload channel.

use std::fmt;

/// Payload format marker used for project identifiers in drag gestures.
pub const PLAIN_TEXT: &str = "text/plain";

/// Kinds of events views listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A form was submitted.
    Submit,
    /// A drag gesture started on the element.
    DragStart,
    /// A drag gesture that started on the element ended.
    DragEnd,
    /// Something is being dragged over the element.
    DragOver,
    /// A drag left the element.
    DragLeave,
    /// Something was dropped on the element.
    Drop,
}

impl EventKind {
    /// Returns the lowercase event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::DragStart => "dragstart",
            Self::DragEnd => "dragend",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations a drag source allows at the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Nothing declared.
    #[default]
    None,
    /// The payload may be copied.
    Copy,
    /// The payload may be moved.
    Move,
    /// Any operation.
    All,
}

/// Key/value payload scoped to a single drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: &str, value: impl Into<String>) {
        let owned = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == format) {
            entry.1 = owned;
        } else {
            self.entries.push((format.to_owned(), owned));
        }
    }

    /// Reads the value stored under `format`.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the stored formats in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Declares the operations allowed at the drop target.
    pub const fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }

    /// Returns the declared allowed operations.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }
}

/// An event delivered to document listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    kind: EventKind,
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DomEvent {
    /// Creates an event without a payload.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            data_transfer: None,
            default_prevented: false,
        }
    }

    /// Creates a drag event carrying `data_transfer`.
    #[must_use]
    pub const fn with_data_transfer(kind: EventKind, data_transfer: DataTransfer) -> Self {
        Self {
            kind,
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Suppresses the default action for this event.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns whether a listener suppressed the default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Returns the drag payload, if any.
    #[must_use]
    pub const fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    /// Returns the drag payload for writing, if any.
    pub const fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    /// Consumes the event and returns its payload.
    #[must_use]
    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }
}
