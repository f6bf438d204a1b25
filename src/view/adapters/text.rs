//! Plain-text outline of a document subtree.

use crate::view::{domain::NodeId, ports::Document};

const INDENT: &str = "  ";

/// Renders `node` and its descendants as an indented outline.
///
/// Each line reads `tag#id.class value="..." "text"`, omitting empty parts.
#[must_use]
pub fn outline(document: &dyn Document, node: NodeId) -> String {
    let mut rendered = String::new();
    let mut stack = vec![(node, 0_usize)];
    while let Some((current, depth)) = stack.pop() {
        let Some(tag) = document.tag(current) else {
            continue;
        };
        let mut line = INDENT.repeat(depth);
        line.push_str(&tag);
        if let Some(element_id) = document.element_id(current) {
            line.push('#');
            line.push_str(&element_id);
        }
        for class in document.classes(current) {
            line.push('.');
            line.push_str(&class);
        }
        if let Some(value) = document.value(current).filter(|value| !value.is_empty()) {
            line.push_str(" value=");
            line.push_str(&quoted(&value));
        }
        if let Some(text) = document.text(current).filter(|text| !text.is_empty()) {
            line.push(' ');
            line.push_str(&quoted(&text));
        }
        rendered.push_str(&line);
        rendered.push('\n');

        let next_depth = depth + 1;
        stack.extend(
            document
                .children(current)
                .into_iter()
                .rev()
                .map(|child| (child, next_depth)),
        );
    }
    rendered
}

fn quoted(value: &str) -> String {
    format!("{value:?}")
}
