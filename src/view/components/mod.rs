//! Board views and the mounting base they share.
//!
//! Every view mounts one fragment through [`Component::mount`] and then
//! implements [`View`]: `configure` wires listeners and subscriptions once,
//! `render` repopulates the fragment from current data and may run any
//! number of times.

mod card;
mod input;
mod labels;
mod list;

pub use card::ProjectCardView;
pub use input::InputFormView;
pub use labels::{LabelError, LabelTemplates, Labels};
pub use list::ProjectListView;

use crate::view::{
    domain::{DomEvent, EventKind, InsertPosition, NodeId, ViewError},
    ports::SharedDocument,
};
use std::rc::Rc;

/// Lifecycle contract implemented by every concrete view.
pub trait View {
    /// Registers event listeners and store subscriptions.
    ///
    /// Called once, while the view is being constructed. Handlers keep a
    /// weak handle to the view so they act on the instance that registered
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when a listener target is missing.
    fn configure(self: &Rc<Self>) -> Result<(), ViewError>;

    /// Populates the mounted fragment from current data.
    ///
    /// Re-running it never duplicates content or leaves stale child views.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when an expected element is missing or a label
    /// fails to render.
    fn render(&self) -> Result<(), ViewError>;

    /// Returns the mounted fragment.
    fn component(&self) -> &Component;
}

/// Element a fragment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountHost<'a> {
    /// Connected element looked up by identifier.
    Id(&'a str),
    /// Element already held by the mounting view.
    Node(NodeId),
}

/// Where and how to mount a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountSpec<'a> {
    /// Registered fragment to instantiate.
    pub template_id: &'a str,
    /// Host element.
    pub host: MountHost<'a>,
    /// Identifier given to the mounted root, if any.
    pub element_id: Option<&'a str>,
    /// Position among the host's existing children.
    pub position: InsertPosition,
}

/// A fragment instance attached to a host element.
pub struct Component {
    document: SharedDocument,
    template_id: String,
    root: NodeId,
}

impl Component {
    /// Instantiates the fragment and attaches it to its host.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::HostNotFound`] or [`ViewError::TemplateNotFound`]
    /// when the page lacks the expected anchors, and [`ViewError::StaleNode`]
    /// when a host node was removed.
    pub fn mount(document: &SharedDocument, spec: &MountSpec<'_>) -> Result<Self, ViewError> {
        let mut doc = document.borrow_mut();
        let host = match spec.host {
            MountHost::Id(host_id) => doc
                .element_by_id(host_id)
                .ok_or_else(|| ViewError::HostNotFound(host_id.to_owned()))?,
            MountHost::Node(node) => node,
        };
        let root = doc.instantiate(spec.template_id)?;
        let attached = spec
            .element_id
            .map_or(Ok(()), |element_id| doc.set_element_id(root, element_id))
            .and_then(|()| doc.insert(host, root, spec.position));
        if let Err(error) = attached {
            doc.remove(root);
            return Err(error);
        }
        drop(doc);

        Ok(Self {
            document: SharedDocument::clone(document),
            template_id: spec.template_id.to_owned(),
            root,
        })
    }

    /// Returns the mounted root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the document the fragment lives in.
    #[must_use]
    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Finds an element inside the fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ElementNotFound`] when nothing matches.
    pub fn select(&self, selector: &str) -> Result<NodeId, ViewError> {
        self.document
            .borrow()
            .query_selector(self.root, selector)
            .ok_or_else(|| ViewError::ElementNotFound {
                selector: selector.to_owned(),
                template: self.template_id.clone(),
            })
    }

    /// Registers `handler` for `kind` events on `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    pub fn listen(
        &self,
        node: NodeId,
        kind: EventKind,
        handler: impl Fn(&mut DomEvent) + 'static,
    ) -> Result<(), ViewError> {
        self.document
            .borrow_mut()
            .add_listener(node, kind, Rc::new(handler))
    }

    /// Sets the text content of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    pub fn set_text(&self, node: NodeId, text: &str) -> Result<(), ViewError> {
        self.document.borrow_mut().set_text(node, text)
    }

    /// Detaches the fragment and frees its nodes and listeners.
    pub fn unmount(&self) {
        self.document.borrow_mut().remove(self.root);
    }

    /// Returns whether the fragment is still attached to the page.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.document.borrow().is_connected(self.root)
    }
}
