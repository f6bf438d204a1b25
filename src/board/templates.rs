//! Default page fragments and the application host.

use crate::view::{
    components::{InputFormView, ProjectCardView, ProjectListView},
    domain::{InsertPosition, NodeSpec, ViewError},
    ports::Document,
};

/// Identifier of the element every board view mounts into.
pub const APP_HOST_ID: &str = "app";

const APP_HOST_TEMPLATE: &str = "app-host";

/// Form with title, description and people fields.
#[must_use]
pub fn project_input() -> NodeSpec {
    NodeSpec::element("form")
        .with_child(labelled_field("title", "Title", input_element("title", "text")))
        .with_child(labelled_field(
            "description",
            "Description",
            NodeSpec::element("textarea")
                .with_id("description")
                .with_attribute("rows", "3"),
        ))
        .with_child(labelled_field(
            "people",
            "People",
            input_element("people", "number")
                .with_attribute("step", "1")
                .with_attribute("min", "0")
                .with_attribute("max", "10"),
        ))
        .with_child(
            NodeSpec::element("button")
                .with_attribute("type", "submit")
                .with_text("ADD PROJECT"),
        )
}

/// Section holding a heading and the list cards are mounted into.
#[must_use]
pub fn project_list() -> NodeSpec {
    NodeSpec::element("section")
        .with_class("projects")
        .with_child(NodeSpec::element("header").with_child(NodeSpec::element("h2")))
        .with_child(NodeSpec::element("ul"))
}

/// Draggable card with title, people label and description.
#[must_use]
pub fn single_project() -> NodeSpec {
    NodeSpec::element("li")
        .with_attribute("draggable", "true")
        .with_child(NodeSpec::element("h2"))
        .with_child(NodeSpec::element("h3"))
        .with_child(NodeSpec::element("p"))
}

fn input_element(element_id: &str, input_type: &str) -> NodeSpec {
    NodeSpec::element("input")
        .with_id(element_id)
        .with_attribute("type", input_type)
}

fn labelled_field(element_id: &str, caption: &str, field: NodeSpec) -> NodeSpec {
    NodeSpec::element("div")
        .with_class("form-control")
        .with_child(
            NodeSpec::element("label")
                .with_attribute("for", element_id)
                .with_text(caption),
        )
        .with_child(field)
}

/// Registers the default fragments and attaches the application host to
/// the document root unless an element with [`APP_HOST_ID`] already exists.
///
/// # Errors
///
/// Returns [`ViewError`] when the host cannot be attached.
pub fn install_page(document: &mut dyn Document) -> Result<(), ViewError> {
    document.register_template(InputFormView::TEMPLATE_ID, project_input());
    document.register_template(ProjectListView::TEMPLATE_ID, project_list());
    document.register_template(ProjectCardView::TEMPLATE_ID, single_project());

    if document.element_by_id(APP_HOST_ID).is_some() {
        return Ok(());
    }
    document.register_template(
        APP_HOST_TEMPLATE,
        NodeSpec::element("div").with_id(APP_HOST_ID),
    );
    let host = document.instantiate(APP_HOST_TEMPLATE)?;
    let root = document.root();
    document.insert(root, host, InsertPosition::BeforeEnd)
}
