//! Node handles and declarative fragment descriptions.

use std::collections::BTreeMap;
use std::fmt;

/// Generational handle to a node owned by a document.
///
/// A handle to a removed node never resolves to a node created later, even
/// when the document reuses its storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Creates a handle from its slot index and generation.
    #[must_use]
    pub const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the storage slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the slot generation the handle was issued for.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}@{}", self.index, self.generation)
    }
}

/// Where a node is attached relative to a host's existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before all existing children.
    AfterBegin,
    /// After all existing children.
    BeforeEnd,
}

/// Declarative description of an element subtree.
///
/// Registered with a document as a named template; every instantiation
/// yields an independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSpec {
    /// Element tag name.
    pub tag: String,
    /// Optional element identifier.
    pub element_id: Option<String>,
    /// Class list.
    pub classes: Vec<String>,
    /// Attributes other than the identifier and classes.
    pub attributes: BTreeMap<String, String>,
    /// Initial text content.
    pub text: String,
    /// Child elements in order.
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Starts an element description.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element identifier.
    #[must_use]
    pub fn with_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the initial text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}
