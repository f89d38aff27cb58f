//! Driving test cases through an engine and comparing the output.
//!
//! Every case is announced before the engine runs, so progress stays visible
//! even when a later invocation fails to start. Comparison is exact string
//! equality. On a mismatch the failing SQL, the actual output and the expected
//! output are written, in that order, to the runner's console writer.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::case::TestCase;
use crate::config::FailurePolicy;
use crate::engine::Engine;
use crate::error::{HarnessError, Result};

/// A case whose engine output differed from its expected output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub name: String,
    pub sql: String,
    pub actual: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Mismatch),
}

/// The result of running a list of cases
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failures: Vec<Mismatch>,

    /// Cases never started because an earlier one failed
    pub skipped: usize,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Runner<'a, E, W> {
    engine: &'a E,
    database: &'a Path,
    policy: FailurePolicy,
    out: W,
}

impl<'a, E: Engine, W: Write> Runner<'a, E, W> {
    pub fn new(engine: &'a E, database: &'a Path, out: W) -> Self {
        Self {
            engine,
            database,
            policy: FailurePolicy::FailFast,
            out,
        }
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run a single case and report a mismatch if there is one
    pub fn run_case(&mut self, case: &TestCase<'_>) -> Result<Outcome> {
        let sql = case.sql_text();
        let expected = case.expected_text();

        writeln!(self.out, "Running test: {}", case.name)?;
        self.out.flush()?;

        let actual = self.engine.execute(self.database, &sql)?;
        if actual == expected {
            return Ok(Outcome::Passed);
        }

        writeln!(self.out, "Test FAILED: '{}'", sql)?;
        writeln!(self.out, "returned '{}'", actual)?;
        writeln!(self.out, "expected '{}'", expected)?;
        self.out.flush()?;

        Ok(Outcome::Failed(Mismatch {
            name: case.name.to_string(),
            sql,
            actual,
            expected,
        }))
    }

    /// Run cases in order
    ///
    /// Under [`FailurePolicy::FailFast`] nothing after the first mismatch is
    /// invoked. Setup errors always end the run.
    pub fn run_all(&mut self, cases: &[TestCase<'_>]) -> Result<Report> {
        let mut report = Report::default();

        for (i, case) in cases.iter().enumerate() {
            match self.run_case(case)? {
                Outcome::Passed => report.passed += 1,
                Outcome::Failed(mismatch) => {
                    report.failures.push(mismatch);
                    if self.policy == FailurePolicy::FailFast {
                        report.skipped = cases.len() - i - 1;
                        break;
                    }
                }
            }
        }

        info!(
            passed = report.passed,
            failed = report.failures.len(),
            skipped = report.skipped,
            "run finished"
        );
        Ok(report)
    }
}

/// Refuse to start when the fixture database is missing
pub fn check_fixture(database: &Path) -> Result<()> {
    if database.is_file() {
        Ok(())
    } else {
        Err(HarnessError::MissingFixture {
            path: database.to_path_buf(),
        })
    }
}
