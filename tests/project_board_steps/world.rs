//! Shared world state for project board BDD scenarios.

use projboard::{
    board::Board,
    config::BoardConfig,
    project::{domain::ProjectStatus, store::ProjectStore},
    view::{
        adapters::{MemoryDocument, RecordingAlert},
        ports::{Alert, SharedDocument},
    },
};
use rstest::fixture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    pub board: Option<Board>,
    pub alert: Rc<RecordingAlert>,
    pub notifications: Rc<Cell<usize>>,
}

impl BoardWorld {
    /// Creates a world with no board mounted yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: None,
            alert: Rc::new(RecordingAlert::new()),
            notifications: Rc::new(Cell::new(0)),
        }
    }

    /// Mounts a fresh board and starts counting store notifications.
    pub fn mount(&mut self) -> Result<(), eyre::Report> {
        let document: SharedDocument = Rc::new(RefCell::new(MemoryDocument::new()));
        let store = ProjectStore::new();
        let counter = Rc::clone(&self.notifications);
        store.subscribe(move |_| counter.set(counter.get() + 1));
        let board = Board::new(
            &document,
            store,
            Rc::clone(&self.alert) as Rc<dyn Alert>,
            &BoardConfig::default(),
        )
        .map_err(|err| eyre::eyre!("mount board: {err}"))?;
        self.board = Some(board);
        Ok(())
    }

    /// Returns the mounted board.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the card titles shown by the list for `status`.
    pub fn titles(&self, status: &str) -> Result<Vec<String>, eyre::Report> {
        let board = self.board()?;
        let parsed = parse_status(status)?;
        let list = board.list(parsed);
        Ok(list
            .assigned_projects()
            .iter()
            .map(|project| project.title().to_owned())
            .collect())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a status named in a scenario.
pub fn parse_status(status: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
