//! Store location resolution.
//!
//! The task collection lives in a single file. Its location is resolved
//! from environment variables, falling back to `~/.task-tracker/tasks.json`.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TASKTRACK_DATA_DIR";

/// Environment variable overriding the store file name.
pub const DB_FILE_ENV: &str = "TASKTRACK_DB_FILE";

/// Directory created under the home directory by default.
const DEFAULT_DATA_DIR_NAME: &str = ".task-tracker";

/// Default store file name.
const DEFAULT_DB_FILE: &str = "tasks.json";

/// Errors returned while resolving store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No data directory was configured and the home directory is unknown.
    #[error("cannot determine home directory; set {}", DATA_DIR_ENV)]
    NoHomeDirectory,

    /// The home directory path is not valid UTF-8.
    #[error("home directory is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

/// Location of the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: Utf8PathBuf,
    file_name: String,
}

impl StoreConfig {
    /// Creates a configuration for an explicit location.
    #[must_use]
    pub fn new(data_dir: impl Into<Utf8PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no data directory is configured and the
    /// home directory cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no data directory is configured and the
    /// home directory cannot be used.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = match non_empty(DATA_DIR_ENV) {
            Some(dir) => Utf8PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let file_name = non_empty(DB_FILE_ENV).unwrap_or_else(|| DEFAULT_DB_FILE.to_owned());

        Ok(Self {
            data_dir,
            file_name,
        })
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the store file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the full path of the store file.
    #[must_use]
    pub fn database_path(&self) -> Utf8PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

fn default_data_dir() -> Result<Utf8PathBuf, ConfigError> {
    let home = dirs::home_dir()
        .ok_or(ConfigError::NoHomeDirectory)
        .and_then(|path| {
            Utf8PathBuf::from_path_buf(path)
                .map_err(|raw| ConfigError::NonUtf8Path(raw.display().to_string()))
        })?;
    Ok(home.join(DEFAULT_DATA_DIR_NAME))
}
