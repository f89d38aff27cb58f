//! sqlconform - Run SQL conformance cases against a database engine executable
//!
//! Each case submits SQL to the engine as `<executable> <database> <sql>` and
//! requires the engine's standard output to equal the expected text exactly.
//! The run stops at the first case that differs.

pub mod case;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod runner;

use std::io::Write;

pub use case::TestCase;
pub use config::{Config, FailurePolicy};
pub use engine::{Engine, ProcessEngine};
pub use error::{HarnessError, Result};
pub use runner::{Mismatch, Outcome, Report, Runner};

/// Run `cases` against the engine and fixture named by `config`
///
/// Console output goes to `out`. The fixture must exist before anything is
/// invoked.
///
/// # Returns
/// * `Ok(Report)` - Every case ran, or the run stopped at a mismatch
/// * `Err(HarnessError)` - The fixture is missing or the engine could not start
pub fn run<W: Write>(cases: &[TestCase<'_>], config: &Config, out: W) -> Result<Report> {
    runner::check_fixture(&config.database)?;

    let engine = ProcessEngine::from_config(config);
    Runner::new(&engine, &config.database, out)
        .policy(config.policy)
        .run_all(cases)
}

/// Write the names of `cases` one per line
pub fn list<W: Write>(cases: &[TestCase<'_>], mut out: W) -> Result<()> {
    for case in cases {
        writeln!(out, "{}", case.name)?;
    }
    Ok(())
}
