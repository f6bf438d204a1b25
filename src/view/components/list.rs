//! List view for one status partition; the target of drag gestures.
//!
//! # Invariants
//! - The list shows exactly the store's projects in its partition, in
//!   creation order, after every store change.
//! - Rendering discards every previous card before mounting new ones.
//! - Drops only ever request a move into this list's partition.

use super::{Component, Labels, MountHost, MountSpec, ProjectCardView, View};
use crate::project::{
    domain::{Project, ProjectId, ProjectStatus},
    store::{ProjectStore, Snapshot, SubscriptionId},
};
use crate::view::{
    domain::{DomEvent, EventKind, InsertPosition, NodeId, PLAIN_TEXT, ViewError},
    ports::SharedDocument,
};
use log::{error, trace};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Class applied to the inner list while it accepts a drag.
pub const DROPPABLE_CLASS: &str = "droppable";

#[derive(Default)]
struct ListState {
    assigned: Vec<Project>,
    cards: Vec<Rc<ProjectCardView>>,
}

/// Renders the projects of one status and accepts drops into it.
pub struct ProjectListView {
    component: Component,
    status: ProjectStatus,
    store: ProjectStore,
    labels: Rc<Labels>,
    list_node: NodeId,
    state: RefCell<ListState>,
    subscription: Cell<Option<SubscriptionId>>,
}

impl ProjectListView {
    /// Fragment the list is instantiated from.
    pub const TEMPLATE_ID: &'static str = "project-list";

    /// Mounts the list for `status` at the end of the `host_id` element and
    /// subscribes it to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the page lacks the expected anchors or the
    /// heading fails to render.
    pub fn new(
        document: &SharedDocument,
        host_id: &str,
        status: ProjectStatus,
        store: ProjectStore,
        labels: Rc<Labels>,
    ) -> Result<Rc<Self>, ViewError> {
        let element_id = format!("{status}-projects");
        let component = Component::mount(
            document,
            &MountSpec {
                template_id: Self::TEMPLATE_ID,
                host: MountHost::Id(host_id),
                element_id: Some(&element_id),
                position: InsertPosition::BeforeEnd,
            },
        )?;
        let list_node = match component.select("ul") {
            Ok(node) => node,
            Err(error) => {
                component.unmount();
                return Err(error);
            }
        };

        let view = Rc::new(Self {
            component,
            status,
            store,
            labels,
            list_node,
            state: RefCell::new(ListState::default()),
            subscription: Cell::new(None),
        });
        if let Err(error) = view.initialise() {
            view.component.unmount();
            return Err(error);
        }
        Ok(view)
    }

    fn initialise(self: &Rc<Self>) -> Result<(), ViewError> {
        self.configure()?;
        self.render_chrome()?;

        // Pick up projects created before this view existed.
        self.assign(self.store.snapshot());
        self.render()
    }

    /// Returns the partition this list shows.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the list's root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.component.root()
    }

    /// Returns the inner list element cards are mounted into.
    #[must_use]
    pub const fn list_node(&self) -> NodeId {
        self.list_node
    }

    /// Returns the identifier given to the inner list element.
    #[must_use]
    pub fn list_element_id(&self) -> String {
        format!("{}-project-list", self.status)
    }

    /// Returns the store subscription held by this view.
    #[must_use]
    pub const fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription.get()
    }

    /// Returns the projects currently assigned to this list.
    #[must_use]
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.state.borrow().assigned.clone()
    }

    /// Returns the number of mounted cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.state.borrow().cards.len()
    }

    /// Returns the root element of the card showing `id`.
    #[must_use]
    pub fn card_for(&self, id: ProjectId) -> Option<NodeId> {
        self.state
            .borrow()
            .cards
            .iter()
            .find(|card| card.project().id() == id)
            .map(|card| card.root())
    }

    /// Returns `(project, card root)` pairs in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<(ProjectId, NodeId)> {
        self.state
            .borrow()
            .cards
            .iter()
            .map(|card| (card.project().id(), card.root()))
            .collect()
    }

    fn render_chrome(&self) -> Result<(), ViewError> {
        let heading = self.component.select("h2")?;
        let title = self.labels.list_heading(self.status)?;
        self.component
            .document()
            .borrow_mut()
            .set_element_id(self.list_node, &self.list_element_id())?;
        self.component.set_text(heading, &title)
    }

    fn assign(&self, snapshot: Snapshot) {
        let relevant = snapshot
            .into_iter()
            .filter(|project| project.status() == self.status)
            .collect();
        self.state.borrow_mut().assigned = relevant;
    }

    fn on_store_change(&self, snapshot: Snapshot) {
        self.assign(snapshot);
        if let Err(err) = self.render() {
            error!(
                "event=render_failed module=list status={} error={err}",
                self.status
            );
        }
    }

    fn on_drag_over(&self, event: &mut DomEvent) {
        let carries_project = event
            .data_transfer()
            .and_then(|data_transfer| data_transfer.types().next())
            == Some(PLAIN_TEXT);
        if !carries_project {
            return;
        }
        event.prevent_default();
        self.set_droppable(true);
    }

    fn on_drag_leave(&self) {
        self.set_droppable(false);
    }

    fn on_drop(&self, event: &mut DomEvent) {
        event.prevent_default();
        self.set_droppable(false);

        let Some(project_id) = event
            .data_transfer()
            .and_then(|data_transfer| data_transfer.get_data(PLAIN_TEXT))
            .and_then(|raw| raw.parse::<ProjectId>().ok())
        else {
            return;
        };
        self.store.move_project(project_id, self.status);
    }

    fn set_droppable(&self, droppable: bool) {
        let mut doc = self.component.document().borrow_mut();
        let result = if droppable {
            doc.add_class(self.list_node, DROPPABLE_CLASS)
        } else {
            doc.remove_class(self.list_node, DROPPABLE_CLASS)
        };
        if let Err(err) = result {
            error!(
                "event=droppable_failed module=list status={} error={err}",
                self.status
            );
        }
    }

    fn listen_weak(
        self: &Rc<Self>,
        kind: EventKind,
        handler: impl Fn(&Self, &mut DomEvent) + 'static,
    ) -> Result<(), ViewError> {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.component.listen(self.root(), kind, move |event| {
            if let Some(view) = weak.upgrade() {
                handler(&view, event);
            }
        })
    }
}

impl View for ProjectListView {
    fn configure(self: &Rc<Self>) -> Result<(), ViewError> {
        let weak = Rc::downgrade(self);
        let subscription = self.store.subscribe(move |snapshot| {
            if let Some(view) = weak.upgrade() {
                view.on_store_change(snapshot);
            }
        });
        self.subscription.set(Some(subscription));

        self.listen_weak(EventKind::DragOver, Self::on_drag_over)?;
        self.listen_weak(EventKind::DragLeave, |view, _| view.on_drag_leave())?;
        self.listen_weak(EventKind::Drop, Self::on_drop)
    }

    fn render(&self) -> Result<(), ViewError> {
        let mut state = self.state.borrow_mut();
        for card in state.cards.drain(..) {
            card.unmount();
        }

        let assigned = state.assigned.clone();
        for project in assigned {
            let card = ProjectCardView::new(
                self.component.document(),
                self.list_node,
                project,
                Rc::clone(&self.labels),
            )?;
            state.cards.push(card);
        }
        trace!(
            "event=list_rendered module=list status={} cards={}",
            self.status,
            state.cards.len()
        );
        Ok(())
    }

    fn component(&self) -> &Component {
        &self.component
    }
}

impl Drop for ProjectListView {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(subscription);
        }
    }
}
