//! User-facing label rendering.
//!
//! Labels are `minijinja` templates so wording can change through
//! configuration without touching the views.

use crate::project::domain::ProjectStatus;
use crate::view::domain::ViewError;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label templates used by the board views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelTemplates {
    /// List heading; context: `partition`.
    pub list_heading: String,
    /// Card people label; context: `people`.
    pub people_assigned: String,
    /// Alert text for rejected input; context: `fields`.
    pub invalid_input: String,
}

impl Default for LabelTemplates {
    fn default() -> Self {
        Self {
            list_heading: "{{ partition | upper }} PROJECTS".to_owned(),
            people_assigned: "{{ people }} {{ 'Person' if people == 1 else 'Persons' }} assigned"
                .to_owned(),
            invalid_input: "There are fields empty or invalid: {{ fields | join(', ') }}."
                .to_owned(),
        }
    }
}

/// Error returned when a label template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("label template '{label}' failed: {reason}")]
pub struct LabelError {
    /// Label whose template failed.
    pub label: &'static str,
    /// Renderer message.
    pub reason: String,
}

impl From<LabelError> for ViewError {
    fn from(error: LabelError) -> Self {
        Self::Label(error.to_string())
    }
}

/// Renders board labels from validated templates.
#[derive(Debug, Clone)]
pub struct Labels {
    environment: Environment<'static>,
    templates: LabelTemplates,
}

impl Labels {
    /// Creates a renderer after test-rendering every template.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] when a template does not parse or render.
    pub fn new(templates: LabelTemplates) -> Result<Self, LabelError> {
        let labels = Self {
            environment: Environment::new(),
            templates,
        };
        labels.list_heading(ProjectStatus::Active)?;
        labels.people_assigned(1)?;
        labels.invalid_input(&["title"])?;
        Ok(labels)
    }

    /// Returns the templates in use.
    #[must_use]
    pub const fn templates(&self) -> &LabelTemplates {
        &self.templates
    }

    /// Heading shown above the list for `status`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] when rendering fails.
    pub fn list_heading(&self, status: ProjectStatus) -> Result<String, LabelError> {
        self.render(
            "list_heading",
            &self.templates.list_heading,
            context! { partition => status.as_str() },
        )
    }

    /// People label on a card; singular exactly when `people` is one.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] when rendering fails.
    pub fn people_assigned(&self, people: u32) -> Result<String, LabelError> {
        self.render(
            "people_assigned",
            &self.templates.people_assigned,
            context! { people => people },
        )
    }

    /// Alert text naming the rejected fields.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] when rendering fails.
    pub fn invalid_input(&self, fields: &[&str]) -> Result<String, LabelError> {
        self.render(
            "invalid_input",
            &self.templates.invalid_input,
            context! { fields => fields },
        )
    }

    fn render(
        &self,
        label: &'static str,
        template: &str,
        ctx: minijinja::Value,
    ) -> Result<String, LabelError> {
        self.environment
            .render_str(template, ctx)
            .map_err(|error| LabelError {
                label,
                reason: error.to_string(),
            })
    }
}
