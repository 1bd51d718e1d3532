//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default database file.
pub const DEFAULT_DB_PATH: &str = "university_results.db";

/// Default time SQLite waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-connection configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,

    /// Open connections read-only. A read-only open fails if the file
    /// does not exist.
    pub read_only: bool,

    /// How long a statement waits on a locked database.
    pub busy_timeout: Duration,
}

impl ClientConfig {
    /// Create a read-write configuration for the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: false,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Open connections read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Set the busy timeout.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
