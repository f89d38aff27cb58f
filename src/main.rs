use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use sqlconform::config::DEFAULT_DATABASE;
use sqlconform::{list, registry, run, Config, FailurePolicy};

/// Exit status when a case's output differs from its expected output
const EXIT_MISMATCH: i32 = 1;

/// Exit status when the run could not be set up
const EXIT_SETUP: i32 = 2;

/// Run SQL conformance cases against a database engine executable
#[derive(Parser, Debug)]
#[command(
    name = "sqlconform",
    version,
    about = "Run SQL conformance cases against a database engine executable",
    long_about = "sqlconform invokes the engine once per case as `<exec> <database> <sql>` and \
                  compares its standard output with the expected text. The run stops at the \
                  first mismatch."
)]
struct Cli {
    /// Engine executable to test [default: $SQLITE_EXEC, else sqlite3]
    #[arg(long = "exec", value_name = "PATH")]
    executable: Option<String>,

    /// Fixture database passed to every invocation
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// Compare output including the engine's final line terminator
    #[arg(long)]
    keep_newline: bool,

    /// Print the case names and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        if let Err(e) = list(registry::CASES, io::stdout().lock()) {
            eprintln!("Error: {}", e);
            process::exit(EXIT_SETUP);
        }
        return;
    }

    let config = Config {
        database: cli.database,
        keep_newline: cli.keep_newline,
        policy: FailurePolicy::FailFast,
        ..Config::from_env().executable_override(cli.executable)
    };

    let report = run(registry::CASES, &config, io::stdout().lock())
        .with_context(|| format!("conformance run against {} aborted", config.executable));

    match report {
        Ok(report) if report.is_success() => {}
        Ok(_) => process::exit(EXIT_MISMATCH),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_SETUP);
        }
    }
}
