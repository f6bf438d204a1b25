//! Error types for mounting and rendering views.

use super::NodeId;
use thiserror::Error;

/// Errors returned while mounting or rendering views.
///
/// Missing templates, hosts and elements are precondition violations of the
/// surrounding page and surface at construction time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// No fragment is registered under the template identifier.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The registered fragment has no root element.
    #[error("template has no root element: {0}")]
    EmptyTemplate(String),

    /// No connected element carries the host identifier.
    #[error("host element not found: {0}")]
    HostNotFound(String),

    /// A selector matched nothing inside a mounted fragment.
    #[error("element '{selector}' not found in {template}")]
    ElementNotFound {
        /// Selector that failed to match.
        selector: String,
        /// Template the fragment was instantiated from.
        template: String,
    },

    /// The node was removed from the document.
    #[error("stale node reference: {0}")]
    StaleNode(NodeId),

    /// The node cannot be inserted into its own subtree.
    #[error("cannot insert {node} into its own subtree")]
    HierarchyRequest {
        /// Node being inserted.
        node: NodeId,
        /// Requested host.
        host: NodeId,
    },

    /// A label template failed to render.
    #[error("label rendering failed: {0}")]
    Label(String),
}
