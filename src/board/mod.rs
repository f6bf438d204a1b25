//! Board bootstrap: one store, one form and the two status lists.
//!
//! The store is constructed by the caller and injected, so several boards
//! can share a store or run side by side in the same process.

pub mod templates;

pub use templates::{APP_HOST_ID, install_page};

use crate::config::BoardConfig;
use crate::project::{
    domain::{ProjectId, ProjectStatus},
    store::ProjectStore,
};
use crate::view::{
    adapters::{DropOutcome, drag_and_drop, outline, submit},
    components::{InputFormView, Labels, ProjectListView, View},
    domain::{NodeId, ViewError},
    ports::{Alert, SharedDocument},
};
use log::debug;
use std::rc::Rc;

/// A mounted project board.
pub struct Board {
    document: SharedDocument,
    store: ProjectStore,
    input: Rc<InputFormView>,
    active: Rc<ProjectListView>,
    finished: Rc<ProjectListView>,
}

impl Board {
    /// Installs the default fragments and host, then mounts the board.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the page cannot be prepared or a view
    /// fails to mount.
    pub fn new(
        document: &SharedDocument,
        store: ProjectStore,
        alert: Rc<dyn Alert>,
        config: &BoardConfig,
    ) -> Result<Self, ViewError> {
        install_page(&mut *document.borrow_mut())?;
        Self::mount(document, store, alert, config)
    }

    /// Mounts the form and both lists into the [`APP_HOST_ID`] element of a
    /// prepared page.
    ///
    /// Views mounted before a failure are removed again.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when a template, the host or an expected
    /// element is missing, or a label template fails.
    pub fn mount(
        document: &SharedDocument,
        store: ProjectStore,
        alert: Rc<dyn Alert>,
        config: &BoardConfig,
    ) -> Result<Self, ViewError> {
        let labels = Rc::new(Labels::new(config.labels.clone())?);
        let input = InputFormView::new(
            document,
            APP_HOST_ID,
            store.clone(),
            alert,
            Rc::clone(&labels),
            config.form.clone(),
        )?;
        let active = ProjectListView::new(
            document,
            APP_HOST_ID,
            ProjectStatus::Active,
            store.clone(),
            Rc::clone(&labels),
        )
        .inspect_err(|_| input.component().unmount())?;
        let finished = ProjectListView::new(
            document,
            APP_HOST_ID,
            ProjectStatus::Finished,
            store.clone(),
            labels,
        )
        .inspect_err(|_| {
            input.component().unmount();
            active.component().unmount();
        })?;
        debug!(
            "event=board_mounted module=board projects={} subscribers={}",
            store.len(),
            store.subscriber_count()
        );

        Ok(Self {
            document: SharedDocument::clone(document),
            store,
            input,
            active,
            finished,
        })
    }

    /// Returns the store behind the board.
    #[must_use]
    pub const fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Returns the document the board is mounted in.
    #[must_use]
    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Returns the new-project form.
    #[must_use]
    pub const fn input(&self) -> &Rc<InputFormView> {
        &self.input
    }

    /// Returns the list showing `status`.
    #[must_use]
    pub const fn list(&self, status: ProjectStatus) -> &Rc<ProjectListView> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Returns the application host element.
    #[must_use]
    pub fn host(&self) -> Option<NodeId> {
        self.document.borrow().element_by_id(APP_HOST_ID)
    }

    /// Returns the card root showing `id`, in whichever list holds it.
    #[must_use]
    pub fn card_node(&self, id: ProjectId) -> Option<NodeId> {
        self.active
            .card_for(id)
            .or_else(|| self.finished.card_for(id))
    }

    /// Fills in the form and submits it.
    ///
    /// Returns whether a project was created; rejected input raises an alert
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the form was removed.
    pub fn submit_project(
        &self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<bool, ViewError> {
        let before = self.store.len();
        self.input.fill(title, description, people)?;
        let submitted = submit(&self.document, self.input.root());
        debug!("event=form_submitted module=board default_action={submitted}");
        Ok(self.store.len() > before)
    }

    /// Drags the card of `id` onto the list showing `status`.
    ///
    /// Returns `None` when no card shows `id`.
    #[must_use]
    pub fn drag_project(&self, id: ProjectId, status: ProjectStatus) -> Option<DropOutcome> {
        let source = self.card_node(id)?;
        let target = self.list(status).list_node();
        Some(drag_and_drop(&self.document, source, target))
    }

    /// Renders the application host as an indented outline.
    #[must_use]
    pub fn outline(&self) -> String {
        self.host()
            .map(|host| outline(&*self.document.borrow(), host))
            .unwrap_or_default()
    }
}
