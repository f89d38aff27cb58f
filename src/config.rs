use std::env;
use std::path::PathBuf;

/// Environment variable naming the engine executable
pub const EXEC_ENV: &str = "SQLITE_EXEC";

/// Engine used when `SQLITE_EXEC` is unset
pub const DEFAULT_EXECUTABLE: &str = "sqlite3";

/// Fixture database every case runs against
pub const DEFAULT_DATABASE: &str = "testing/testing.db";

/// What the runner does after a case fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run at the first mismatch
    FailFast,

    /// Report every mismatch and keep going
    Continue,
}

/// Configuration for a conformance run
#[derive(Debug, Clone)]
pub struct Config {
    /// Engine executable, a bare name looked up on PATH or a path
    pub executable: String,

    /// Fixture database handed to every invocation
    pub database: PathBuf,

    /// Keep the final line terminator of the engine output
    pub keep_newline: bool,

    pub policy: FailurePolicy,
}

impl Config {
    pub fn new() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            database: PathBuf::from(DEFAULT_DATABASE),
            keep_newline: false,
            policy: FailurePolicy::FailFast,
        }
    }

    /// Default configuration with the executable taken from `SQLITE_EXEC`
    pub fn from_env() -> Self {
        Self::new().executable_override(env::var(EXEC_ENV).ok())
    }

    /// Replace the executable when `value` is set
    ///
    /// An empty override counts as unset.
    pub fn executable_override(mut self, value: Option<String>) -> Self {
        if let Some(executable) = value.filter(|v| !v.is_empty()) {
            self.executable = executable;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
