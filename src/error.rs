use std::fmt;
use std::path::PathBuf;

/// Errors that stop a run before or between comparisons
///
/// Output mismatches are not errors; they are reported through
/// [`crate::runner::Report`].
#[derive(Debug)]
pub enum HarnessError {
    /// The engine executable could not be started
    Spawn {
        executable: String,
        source: std::io::Error,
    },

    /// The fixture database does not exist
    MissingFixture { path: PathBuf },

    /// Failed to write console output
    Output { source: std::io::Error },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HarnessError::Spawn { executable, .. } => {
                write!(f, "Failed to start engine {}", executable)
            }
            HarnessError::MissingFixture { path } => {
                write!(f, "Fixture database {} does not exist", path.display())
            }
            HarnessError::Output { .. } => write!(f, "Failed to write output"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Spawn { source, .. } => Some(source),
            HarnessError::Output { source } => Some(source),
            HarnessError::MissingFixture { .. } => None,
        }
    }
}

impl From<std::io::Error> for HarnessError {
    fn from(error: std::io::Error) -> Self {
        HarnessError::Output { source: error }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_cause_is_reported_once() {
        let err = HarnessError::Spawn {
            executable: "limbo".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to start engine limbo");
        assert_eq!(err.source().map(|s| s.to_string()), Some("not found".to_string()));

        let chain = format!("{:#}", anyhow::Error::new(err).context("run aborted"));
        assert_eq!(chain, "run aborted: Failed to start engine limbo: not found");
    }

    #[test]
    fn test_missing_fixture_has_no_source() {
        let err = HarnessError::MissingFixture {
            path: PathBuf::from("testing/testing.db"),
        };
        assert_eq!(err.to_string(), "Fixture database testing/testing.db does not exist");
        assert!(err.source().is_none());
    }
}
