//! Card view for a single project; the source of drag gestures.

use super::{Component, Labels, MountHost, MountSpec, View};
use crate::project::domain::Project;
use crate::view::{
    domain::{DropEffect, EventKind, InsertPosition, NodeId, PLAIN_TEXT, ViewError},
    ports::SharedDocument,
};
use log::trace;
use std::rc::Rc;

/// Renders one project. Recreated on every render of its list.
pub struct ProjectCardView {
    component: Component,
    project: Project,
    labels: Rc<Labels>,
}

impl ProjectCardView {
    /// Fragment the card is instantiated from.
    pub const TEMPLATE_ID: &'static str = "single-project";

    /// Mounts a card for `project` at the end of `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the host was removed, the template is
    /// missing or the card fails to render.
    pub fn new(
        document: &SharedDocument,
        host: NodeId,
        project: Project,
        labels: Rc<Labels>,
    ) -> Result<Rc<Self>, ViewError> {
        let component = Component::mount(
            document,
            &MountSpec {
                template_id: Self::TEMPLATE_ID,
                host: MountHost::Node(host),
                element_id: None,
                position: InsertPosition::BeforeEnd,
            },
        )?;
        let card = Rc::new(Self {
            component,
            project,
            labels,
        });

        if let Err(error) = card.configure().and_then(|()| card.render()) {
            card.unmount();
            return Err(error);
        }
        Ok(card)
    }

    /// Returns the rendered project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the card's root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.component.root()
    }

    /// Returns the pluralised people label.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Label`] when the label template fails.
    pub fn persons_label(&self) -> Result<String, ViewError> {
        Ok(self.labels.people_assigned(self.project.people())?)
    }

    /// Removes the card and its listeners from the document.
    pub fn unmount(&self) {
        self.component.unmount();
    }
}

impl View for ProjectCardView {
    fn configure(self: &Rc<Self>) -> Result<(), ViewError> {
        let root = self.component.root();
        let payload = self.project.id().to_string();
        self.component.listen(root, EventKind::DragStart, move |event| {
            if let Some(data_transfer) = event.data_transfer_mut() {
                data_transfer.set_data(PLAIN_TEXT, payload.as_str());
                data_transfer.set_effect_allowed(DropEffect::Move);
            }
        })?;

        let project_id = self.project.id();
        self.component.listen(root, EventKind::DragEnd, move |_| {
            trace!("event=drag_end module=card id={project_id}");
        })
    }

    fn render(&self) -> Result<(), ViewError> {
        let persons = self.persons_label()?;
        let title = self.component.select("h2")?;
        let people = self.component.select("h3")?;
        let description = self.component.select("p")?;

        self.component.set_text(title, self.project.title())?;
        self.component.set_text(people, &persons)?;
        self.component
            .set_text(description, self.project.description())
    }

    fn component(&self) -> &Component {
        &self.component
    }
}
