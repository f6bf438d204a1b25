//! Board configuration: label wording and form validation rules.
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration.

use crate::project::validation::FieldRules;
use crate::view::components::{LabelError, LabelTemplates, Labels};
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Validation rules for the three form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormRules {
    /// Rules for the project title.
    pub title: FieldRules,
    /// Rules for the project description.
    pub description: FieldRules,
    /// Rules for the number of people.
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules::required(),
            description: FieldRules::required().with_min_length(5),
            people: FieldRules::required().with_min(1.0).with_max(10.0),
        }
    }
}

/// Complete board configuration.
///
/// # Examples
///
/// ```
/// use projboard::config::BoardConfig;
///
/// let config = BoardConfig::from_json_str(r#"{"form": {"title": {"required": true}}}"#)
///     .expect("valid configuration");
/// assert!(config.form.title.required);
/// assert_eq!(config.form.description.min_length, Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Label templates.
    pub labels: LabelTemplates,
    /// Form validation rules.
    pub form: FormRules,
    /// Log level used when none is given on the command line.
    pub log_level: Option<String>,
}

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The configuration path has no file name.
    #[error("configuration path '{0}' does not name a file")]
    NotAFile(String),

    /// The configuration is not valid JSON for [`BoardConfig`].
    #[error("invalid configuration: {0}")]
    Json(Arc<serde_json::Error>),

    /// A label template does not render.
    #[error(transparent)]
    Label(#[from] LabelError),
}

impl BoardConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Label`] for broken label templates.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Json(Arc::new(err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// Only the file's parent directory is opened with ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_string(),
            source: Arc::new(source),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::NotAFile(path.to_string()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let raw = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json_str(&raw)
    }

    /// Checks that every label template renders.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Label`] naming the first broken template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Labels::new(self.labels.clone())?;
        Ok(())
    }
}
