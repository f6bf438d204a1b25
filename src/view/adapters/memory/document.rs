//! In-memory element tree implementing the document port.

use crate::view::{
    domain::{EventKind, InsertPosition, NodeId, NodeSpec, ViewError},
    ports::{Document, EventHandler},
};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

const ROOT_TAG: &str = "body";

struct NodeData {
    tag: String,
    element_id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(EventKind, EventHandler)>,
}

impl NodeData {
    fn from_spec(spec: &NodeSpec) -> Self {
        Self {
            tag: spec.tag.to_ascii_lowercase(),
            element_id: spec.element_id.clone(),
            classes: spec.classes.clone(),
            attributes: spec.attributes.clone(),
            text: spec.text.clone(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

#[derive(Default)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// Element tree held entirely in memory.
///
/// Slots of removed nodes are reused with a bumped generation, so repeated
/// re-rendering does not grow the tree.
pub struct MemoryDocument {
    slots: Vec<Slot>,
    free: Vec<usize>,
    templates: HashMap<String, NodeSpec>,
    root: NodeId,
}

impl MemoryDocument {
    /// Creates a document containing only its root element.
    #[must_use]
    pub fn new() -> Self {
        let root_slot = Slot {
            generation: 0,
            node: Some(NodeData::from_spec(&NodeSpec::element(ROOT_TAG))),
        };
        Self {
            slots: vec![root_slot],
            free: Vec::new(),
            templates: HashMap::new(),
            root: NodeId::new(0, 0),
        }
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, ViewError> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ViewError::StaleNode(id))
    }

    fn allocate(&mut self, data: NodeData) -> NodeId {
        if let Some(index) = self.free.pop()
            && let Some(slot) = self.slots.get_mut(index)
        {
            slot.node = Some(data);
            return NodeId::new(index, slot.generation);
        }
        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(data),
        });
        NodeId::new(index, 0)
    }

    fn build(&mut self, spec: &NodeSpec, parent: Option<NodeId>) -> NodeId {
        let mut data = NodeData::from_spec(spec);
        data.parent = parent;
        let id = self.allocate(data);
        let children: Vec<NodeId> = spec
            .children
            .iter()
            .map(|child| self.build(child, Some(id)))
            .collect();
        if let Ok(node) = self.node_mut(id) {
            node.children = children;
        }
        id
    }

    fn free(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index())
                .filter(|slot| slot.generation == current.generation())
            else {
                continue;
            };
            if let Some(data) = slot.node.take() {
                pending.extend(data.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index());
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.node(id).and_then(|node| node.parent);
        if let Some(parent_id) = parent
            && let Ok(parent_node) = self.node_mut(parent_id)
        {
            parent_node.children.retain(|child| *child != id);
        }
        if let Ok(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == candidate {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Descendants of `scope` in document order, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            ordered.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        ordered
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let Some(data) = self.node(node) else {
            return false;
        };
        selector.strip_prefix('#').map_or_else(
            || data.tag.eq_ignore_ascii_case(selector),
            |wanted| data.element_id.as_deref() == Some(wanted),
        )
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("nodes", &self.node_count())
            .field("templates", &self.templates.len())
            .finish_non_exhaustive()
    }
}

impl Document for MemoryDocument {
    fn register_template(&mut self, template_id: &str, fragment: NodeSpec) {
        self.templates.insert(template_id.to_owned(), fragment);
    }

    fn instantiate(&mut self, template_id: &str) -> Result<NodeId, ViewError> {
        let spec = self
            .templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| ViewError::TemplateNotFound(template_id.to_owned()))?;
        if spec.tag.trim().is_empty() {
            return Err(ViewError::EmptyTemplate(template_id.to_owned()));
        }
        Ok(self.build(&spec, None))
    }

    fn root(&self) -> NodeId {
        self.root
    }

    fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|node| {
            self.node(*node)
                .is_some_and(|data| data.element_id.as_deref() == Some(element_id))
        })
    }

    fn query_selector(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|node| self.matches(*node, selector))
    }

    fn insert(
        &mut self,
        host: NodeId,
        node: NodeId,
        position: InsertPosition,
    ) -> Result<(), ViewError> {
        if !self.contains(host) {
            return Err(ViewError::StaleNode(host));
        }
        if !self.contains(node) {
            return Err(ViewError::StaleNode(node));
        }
        if self.is_ancestor_or_self(node, host) {
            return Err(ViewError::HierarchyRequest { node, host });
        }

        self.detach(node);
        self.node_mut(node)?.parent = Some(host);
        let host_node = self.node_mut(host)?;
        match position {
            InsertPosition::AfterBegin => host_node.children.insert(0, node),
            InsertPosition::BeforeEnd => host_node.children.push(node),
        }
        Ok(())
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root || !self.contains(node) {
            return;
        }
        self.detach(node);
        self.free(node);
    }

    fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_ancestor_or_self(self.root, node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|data| data.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    fn tag(&self, node: NodeId) -> Option<String> {
        self.node(node).map(|data| data.tag.clone())
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.node(node).and_then(|data| data.element_id.clone())
    }

    fn set_element_id(&mut self, node: NodeId, element_id: &str) -> Result<(), ViewError> {
        self.node_mut(node)?.element_id = Some(element_id.to_owned());
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.node(node).map(|data| data.text.clone())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), ViewError> {
        text.clone_into(&mut self.node_mut(node)?.text);
        Ok(())
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.node(node).map(|data| data.value.clone())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), ViewError> {
        value.clone_into(&mut self.node_mut(node)?.value);
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)
            .and_then(|data| data.attributes.get(name).cloned())
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.node(node)
            .map(|data| data.classes.clone())
            .unwrap_or_default()
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), ViewError> {
        let data = self.node_mut(node)?;
        if !data.classes.iter().any(|existing| existing == class) {
            data.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), ViewError> {
        self.node_mut(node)?
            .classes
            .retain(|existing| existing != class);
        Ok(())
    }

    fn add_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: EventHandler,
    ) -> Result<(), ViewError> {
        self.node_mut(node)?.listeners.push((kind, handler));
        Ok(())
    }

    fn listeners(&self, node: NodeId, kind: EventKind) -> Vec<EventHandler> {
        self.node(node)
            .map(|data| {
                data.listeners
                    .iter()
                    .filter(|(registered, _)| *registered == kind)
                    .map(|(_, handler)| Rc::clone(handler))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }
}
