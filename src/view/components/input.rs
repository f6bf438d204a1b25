//! New-project form; validates input and issues create commands.

use super::{Component, Labels, MountHost, MountSpec, View};
use crate::config::FormRules;
use crate::project::{
    store::ProjectStore,
    validation::{FieldValue, Validatable, validate},
};
use crate::view::{
    domain::{DomEvent, EventKind, InsertPosition, NodeId, ViewError},
    ports::{Alert, SharedDocument},
};
use log::{error, info};
use std::rc::Rc;

const TITLE_FIELD: &str = "title";
const DESCRIPTION_FIELD: &str = "description";
const PEOPLE_FIELD: &str = "people";
const FALLBACK_ALERT: &str = "There are fields empty or invalid.";

/// Validated form input ready to become a project.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectInput {
    title: String,
    description: String,
    people: u32,
}

/// Collects new-project data and hands valid entries to the store.
pub struct InputFormView {
    component: Component,
    store: ProjectStore,
    alert: Rc<dyn Alert>,
    labels: Rc<Labels>,
    rules: FormRules,
    title_input: NodeId,
    description_input: NodeId,
    people_input: NodeId,
}

impl InputFormView {
    /// Fragment the form is instantiated from.
    pub const TEMPLATE_ID: &'static str = "project-input";
    /// Identifier given to the mounted form.
    pub const ELEMENT_ID: &'static str = "user-input";

    /// Mounts the form at the start of the `host_id` element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the page lacks the form template, the host
    /// or one of the three input fields.
    pub fn new(
        document: &SharedDocument,
        host_id: &str,
        store: ProjectStore,
        alert: Rc<dyn Alert>,
        labels: Rc<Labels>,
        rules: FormRules,
    ) -> Result<Rc<Self>, ViewError> {
        let component = Component::mount(
            document,
            &MountSpec {
                template_id: Self::TEMPLATE_ID,
                host: MountHost::Id(host_id),
                element_id: Some(Self::ELEMENT_ID),
                position: InsertPosition::AfterBegin,
            },
        )?;
        let [title_input, description_input, people_input] = match select_fields(&component) {
            Ok(fields) => fields,
            Err(error) => {
                component.unmount();
                return Err(error);
            }
        };

        let form = Rc::new(Self {
            component,
            store,
            alert,
            labels,
            rules,
            title_input,
            description_input,
            people_input,
        });
        form.configure()?;
        Ok(form)
    }

    /// Returns the form's root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.component.root()
    }

    /// Returns the title, description and people input elements.
    #[must_use]
    pub const fn fields(&self) -> [NodeId; 3] {
        [self.title_input, self.description_input, self.people_input]
    }

    /// Types raw values into the three fields, as a user would.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::StaleNode`] when the form was removed.
    pub fn fill(&self, title: &str, description: &str, people: &str) -> Result<(), ViewError> {
        let mut doc = self.component.document().borrow_mut();
        doc.set_value(self.title_input, title)?;
        doc.set_value(self.description_input, description)?;
        doc.set_value(self.people_input, people)
    }

    fn on_submit(&self, event: &mut DomEvent) {
        event.prevent_default();
        match self.gather_input() {
            Ok(input) => {
                self.store
                    .add_project(input.title, input.description, input.people);
                self.clear_inputs();
            }
            Err(failed) => {
                info!(
                    "event=input_rejected module=form fields={}",
                    failed.join(",")
                );
                let message = self.labels.invalid_input(&failed).unwrap_or_else(|err| {
                    error!("event=label_failed module=form error={err}");
                    FALLBACK_ALERT.to_owned()
                });
                self.alert.alert(&message);
            }
        }
    }

    fn gather_input(&self) -> Result<ProjectInput, Vec<&'static str>> {
        let [title, description, people] = {
            let doc = self.component.document().borrow();
            self.fields().map(|node| doc.value(node).unwrap_or_default())
        };

        let checks = [
            Validatable::new(
                TITLE_FIELD,
                FieldValue::text(title.as_str()),
                self.rules.title.clone(),
            ),
            Validatable::new(
                DESCRIPTION_FIELD,
                FieldValue::text(description.as_str()),
                self.rules.description.clone(),
            ),
            Validatable::new(
                PEOPLE_FIELD,
                FieldValue::number_from_input(&people),
                self.rules.people.clone(),
            ),
        ];
        let mut failed: Vec<&'static str> = [TITLE_FIELD, DESCRIPTION_FIELD, PEOPLE_FIELD]
            .into_iter()
            .zip(checks.iter())
            .filter(|(_, check)| !validate(check))
            .map(|(field, _)| field)
            .collect();

        // A project counts whole people even when the bounds admit fractions.
        let head_count = whole_people(&people);
        if head_count.is_none() && !failed.contains(&PEOPLE_FIELD) {
            failed.push(PEOPLE_FIELD);
        }

        match head_count {
            Some(people_count) if failed.is_empty() => Ok(ProjectInput {
                title,
                description,
                people: people_count,
            }),
            _ => Err(failed),
        }
    }

    fn clear_inputs(&self) {
        if let Err(err) = self.fill("", "", "") {
            error!("event=clear_failed module=form error={err}");
        }
    }
}

/// Returns the head count `raw` denotes when it is a whole number.
///
/// Whole floats display without a fractional part, so "3.0" and "3e0" read
/// back as 3 while "2.5" does not parse.
fn whole_people(raw: &str) -> Option<u32> {
    match FieldValue::number_from_input(raw) {
        FieldValue::Number(number) if number.is_finite() => number.to_string().parse().ok(),
        FieldValue::Number(_) | FieldValue::Text(_) => None,
    }
}

fn select_fields(component: &Component) -> Result<[NodeId; 3], ViewError> {
    Ok([
        component.select("#title")?,
        component.select("#description")?,
        component.select("#people")?,
    ])
}

impl View for InputFormView {
    fn configure(self: &Rc<Self>) -> Result<(), ViewError> {
        let weak = Rc::downgrade(self);
        self.component
            .listen(self.root(), EventKind::Submit, move |event| {
                if let Some(form) = weak.upgrade() {
                    form.on_submit(event);
                }
            })
    }

    fn render(&self) -> Result<(), ViewError> {
        Ok(())
    }

    fn component(&self) -> &Component {
        &self.component
    }
}
