//! Project record and its status lifecycle.

use super::{ParseProjectStatusError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board partition a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is being worked on.
    Active,
    /// Project has been completed.
    Finished,
}

impl ProjectStatus {
    /// Every status, in board order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-created project shown as a card on the board.
///
/// Only [`ProjectStatus`] changes after creation, and only through the
/// project store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a fresh identifier.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> u32 {
        self.people
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the project into `status`.
    ///
    /// Returns `false` when the project already had that status.
    pub(crate) fn transition_to(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}
