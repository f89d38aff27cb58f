//! Invoking the database engine under test.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{HarnessError, Result};

/// Something that runs SQL against a database file and returns what it printed
pub trait Engine {
    fn execute(&self, database: &Path, sql: &str) -> Result<String>;
}

/// The engine as an external process: `<executable> <database> <sql>`
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    executable: String,
    keep_newline: bool,
}

impl ProcessEngine {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            keep_newline: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            executable: config.executable.clone(),
            keep_newline: config.keep_newline,
        }
    }

    pub fn keep_newline(mut self, keep: bool) -> Self {
        self.keep_newline = keep;
        self
    }
}

impl Engine for ProcessEngine {
    fn execute(&self, database: &Path, sql: &str) -> Result<String> {
        debug!(
            executable = %self.executable,
            database = %database.display(),
            sql,
            "invoking engine"
        );

        // The SQL goes through as a single argument, no shell involved.
        let output = Command::new(&self.executable)
            .arg(database)
            .arg(sql)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| HarnessError::Spawn {
                executable: self.executable.clone(),
                source: e,
            })?;

        if !output.status.success() {
            warn!(
                executable = %self.executable,
                status = %output.status,
                sql,
                "engine exited unsuccessfully"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if self.keep_newline {
            Ok(stdout)
        } else {
            Ok(strip_final_newline(stdout))
        }
    }
}

/// Remove the terminator the engine prints after its last row
///
/// Only one terminator goes; a blank final row survives as an empty line.
pub fn strip_final_newline(mut output: String) -> String {
    if output.ends_with('\n') {
        output.pop();
        if output.ends_with('\r') {
            output.pop();
        }
    }
    output
}
