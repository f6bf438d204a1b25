//! Document port: fragment mounting, element access and event listeners.

use crate::view::domain::{DomEvent, EventKind, InsertPosition, NodeId, NodeSpec, ViewError};
use std::cell::RefCell;
use std::rc::Rc;

/// Listener invoked with the event being dispatched.
pub type EventHandler = Rc<dyn Fn(&mut DomEvent)>;

/// Document shared between every view mounted on one page.
pub type SharedDocument = Rc<RefCell<dyn Document>>;

/// Element tree that views mount fragments into.
///
/// Reads on removed nodes return `None` or an empty result; writes fail with
/// [`ViewError::StaleNode`].
pub trait Document {
    /// Registers `fragment` under `template_id`, replacing any previous one.
    fn register_template(&mut self, template_id: &str, fragment: NodeSpec);

    /// Creates a detached copy of the template's root element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::TemplateNotFound`] for unknown templates.
    fn instantiate(&mut self, template_id: &str) -> Result<NodeId, ViewError>;

    /// Returns the root node every page element descends from.
    fn root(&self) -> NodeId;

    /// Finds a connected element by identifier.
    fn element_by_id(&self, element_id: &str) -> Option<NodeId>;

    /// Finds the first element under `scope` matching `#id` or a tag name.
    fn query_selector(&self, scope: NodeId, selector: &str) -> Option<NodeId>;

    /// Attaches `node` to `host` at `position`, detaching it from any
    /// previous parent.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when either node was removed.
    fn insert(
        &mut self,
        host: NodeId,
        node: NodeId,
        position: InsertPosition,
    ) -> Result<(), ViewError>;

    /// Detaches `node` and frees its subtree together with its listeners.
    ///
    /// Removing an already removed node does nothing.
    fn remove(&mut self, node: NodeId);

    /// Returns whether `node` still exists.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns whether `node` is connected to the document root.
    fn is_connected(&self, node: NodeId) -> bool;

    /// Returns the parent of `node`.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Returns the children of `node` in order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns the tag name of `node`.
    fn tag(&self, node: NodeId) -> Option<String>;

    /// Returns the identifier of `node`.
    fn element_id(&self, node: NodeId) -> Option<String>;

    /// Sets the identifier of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn set_element_id(&mut self, node: NodeId, element_id: &str) -> Result<(), ViewError>;

    /// Returns the text content of `node`.
    fn text(&self, node: NodeId) -> Option<String>;

    /// Replaces the text content of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), ViewError>;

    /// Returns the form value of `node`.
    fn value(&self, node: NodeId) -> Option<String>;

    /// Replaces the form value of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), ViewError>;

    /// Returns an attribute of `node`.
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Returns the classes of `node` in insertion order.
    fn classes(&self, node: NodeId) -> Vec<String>;

    /// Adds `class` to `node` unless present.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), ViewError>;

    /// Removes `class` from `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), ViewError>;

    /// Registers `handler` for `kind` events reaching `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the node was removed.
    fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: EventHandler,
    ) -> Result<(), ViewError>;

    /// Returns the handlers registered on `node` for `kind`, in order.
    fn listeners(&self, node: NodeId, kind: EventKind) -> Vec<EventHandler>;

    /// Returns the number of live nodes, detached ones included.
    fn node_count(&self) -> usize;

    /// Returns whether `node` has `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|candidate| candidate == class)
    }
}

/// Delivers `event` to `target` and then to each of its ancestors.
///
/// Handlers run in registration order with the document unborrowed, so they
/// may mutate the document or trigger store updates that re-render views.
/// Returns `false` when a handler suppressed the default action.
pub fn dispatch(document: &SharedDocument, target: NodeId, event: &mut DomEvent) -> bool {
    let path = {
        let doc = document.borrow();
        let mut chain = Vec::new();
        let mut cursor = doc.contains(target).then_some(target);
        while let Some(node) = cursor {
            chain.push(node);
            cursor = doc.parent(node);
        }
        chain
    };

    for node in path {
        let handlers = document.borrow().listeners(node, event.kind());
        for handler in handlers {
            handler(event);
        }
    }

    !event.default_prevented()
}
