//! Drives a project board from the terminal.
//!
//! Usage:
//!
//! ```text
//! projboard [--config <path>] [--log-level <level>]
//! ```
//!
//! Commands are read from stdin, one per line:
//!
//! ```text
//! add Build API | Design REST endpoints | 3
//! move 1 finished
//! show
//! json
//! quit
//! ```
//!
//! The board lives in an in-memory document; `show` prints its outline.

use camino::Utf8PathBuf;
use clap::Parser;
use log::{error, info};
use projboard::board::Board;
use projboard::config::{BoardConfig, ConfigError};
use projboard::logging::{LoggingError, default_log_level, init_logging};
use projboard::project::domain::{ProjectId, ProjectStatus};
use projboard::project::store::ProjectStore;
use projboard::view::adapters::{DropOutcome, MemoryDocument};
use projboard::view::domain::ViewError;
use projboard::view::ports::{Alert, SharedDocument};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const USAGE: &str = "\
commands:
  add <title> | <description> | <people>
  move <n|id-prefix> <active|finished>
  show
  json
  help
  quit";

#[derive(Debug, Parser)]
#[command(name = "projboard")]
#[command(about = "Create projects and drag them between active and finished lists")]
#[command(version)]
struct Cli {
    /// JSON configuration file with label templates and form rules.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long)]
    log_level: Option<String>,
}

/// Errors that end a session.
#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("failed to mount board: {0}")]
    Mount(#[from] ViewError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode projects: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        target: String,
        status: ProjectStatus,
    },
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb {
            "add" => Self::parse_add(rest)?,
            "move" => Self::parse_move(rest)?,
            "show" => Self::Show,
            "json" => Self::Json,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}'; try 'help'")),
        };
        Ok(Some(command))
    }

    fn parse_add(rest: &str) -> Result<Self, String> {
        let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
        let [title, description, people] = parts.as_slice() else {
            return Err("usage: add <title> | <description> | <people>".to_owned());
        };
        Ok(Self::Add {
            title: (*title).to_owned(),
            description: (*description).to_owned(),
            people: (*people).to_owned(),
        })
    }

    fn parse_move(rest: &str) -> Result<Self, String> {
        let mut words = rest.split_whitespace();
        let (Some(target), Some(raw_status), None) = (words.next(), words.next(), words.next())
        else {
            return Err("usage: move <n|id-prefix> <active|finished>".to_owned());
        };
        let status = ProjectStatus::try_from(raw_status).map_err(|err| err.to_string())?;
        Ok(Self::Move {
            target: target.to_owned(),
            status,
        })
    }
}

/// Alert adapter writing to stderr.
struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        if let Err(err) = writeln!(io::stderr().lock(), "alert: {message}") {
            error!("event=alert_failed module=cli error={err}");
        }
    }
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    run(&cli).map_err(Into::into)
}

fn run(cli: &Cli) -> Result<(), SessionError> {
    let config = cli
        .config
        .as_deref()
        .map_or_else(|| Ok(BoardConfig::default()), BoardConfig::load)?;
    init_logging(log_level(cli, &config))?;

    let document: SharedDocument = Rc::new(RefCell::new(MemoryDocument::new()));
    let board = Board::new(
        &document,
        ProjectStore::new(),
        Rc::new(TerminalAlert),
        &config,
    )?;
    info!("event=session_start module=cli config={:?}", cli.config);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let raw = line?;
        match Command::parse(&raw) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&board, &command, &mut out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    info!("event=session_end module=cli projects={}", board.store().len());
    Ok(())
}

/// Picks the log level: command line first, then configuration, then the
/// build default.
fn log_level<'a>(cli: &'a Cli, config: &'a BoardConfig) -> &'a str {
    let fallback = default_log_level();
    cli.log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or(fallback)
}

fn execute(board: &Board, command: &Command, out: &mut impl Write) -> Result<(), SessionError> {
    match command {
        Command::Add {
            title,
            description,
            people,
        } => {
            if board.submit_project(title, description, people)? {
                writeln!(out, "added '{title}'")?;
            }
        }
        Command::Move { target, status } => match resolve(board, target) {
            Ok(id) => match board.drag_project(id, *status) {
                Some(DropOutcome::Dropped) => writeln!(out, "dropped on {status}")?,
                Some(DropOutcome::Rejected) => writeln!(out, "{status} list rejected the drop")?,
                None => writeln!(out, "no card for {id}")?,
            },
            Err(message) => writeln!(out, "{message}")?,
        },
        Command::Show => write!(out, "{}", board.outline())?,
        Command::Json => {
            let encoded = serde_json::to_string_pretty(&board.store().snapshot())?;
            writeln!(out, "{encoded}")?;
        }
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Quit => {}
    }
    Ok(())
}

/// Resolves a 1-based board position or a unique identifier prefix.
fn resolve(board: &Board, target: &str) -> Result<ProjectId, String> {
    let in_board_order: Vec<ProjectId> = ProjectStatus::ALL
        .iter()
        .flat_map(|status| board.list(*status).cards())
        .map(|(id, _)| id)
        .collect();

    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| in_board_order.get(index).copied())
            .ok_or_else(|| format!("no card at position {position}"));
    }

    let mut matches = in_board_order
        .iter()
        .filter(|id| id.to_string().starts_with(target));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(*id),
        (Some(_), Some(_)) => Err(format!("'{target}' matches several projects")),
        (None, _) => Err(format!("no project matches '{target}'")),
    }
}
