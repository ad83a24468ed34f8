//! Static startup configuration. Defaults live in a dot-directory under the
//! user's home, the same place the database has always been kept, and each
//! value can be overridden from the environment.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".student-crud";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "students.sqlite";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const DB_PATH_ENV: &str = "STUDENT_CRUD_DB";
pub const LOG_DIR_ENV: &str = "STUDENT_CRUD_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "STUDENT_CRUD_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the student database file.
    pub database: PathBuf,
    /// Directory receiving rotated log files.
    pub log_dir: PathBuf,
    /// Level spec handed to the logger, e.g. `info` or `debug`.
    pub log_level: String,
}

impl AppConfig {
    /// Resolve the configuration from the home directory and the process
    /// environment.
    pub fn load() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::resolve(base_dirs.home_dir(), |key| {
            env::var(key).ok()
        }))
    }

    /// Build the configuration from an explicit home directory and variable
    /// lookup. Blank overrides are ignored.
    pub fn resolve(home: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let data_dir = home.join(DATA_DIR_NAME);

        Self {
            database: lookup(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(DB_FILE_NAME)),
            log_dir: lookup(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(LOG_DIR_NAME)),
            log_level: lookup(LOG_LEVEL_ENV)
                .map(|level| level.trim().to_string())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
