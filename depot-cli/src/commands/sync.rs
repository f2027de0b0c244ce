//! The pull, verify, and patch commands.
//!
//! All three run the same reconciliation engine against the current
//! directory; only the policy differs.

use std::env;

use depot::sync::{SyncEngine, SyncPolicy, SyncVerdict};

use crate::error::CliError;
use crate::output::{self, ConsoleReporter, TerminalPrompt};

use super::common::Connection;

/// `depot pull` - apply every change.
pub fn run_pull(
    connection: &Connection,
    package: &str,
    version: &str,
) -> Result<SyncVerdict, CliError> {
    run(connection, package, version, SyncPolicy::ApplyAll)
}

/// `depot verify` - classify and count, change nothing.
pub fn run_verify(
    connection: &Connection,
    package: &str,
    version: &str,
) -> Result<SyncVerdict, CliError> {
    run(connection, package, version, SyncPolicy::RejectAll)
}

/// `depot patch` - confirm every change interactively.
pub fn run_patch(
    connection: &Connection,
    package: &str,
    version: &str,
) -> Result<SyncVerdict, CliError> {
    run(
        connection,
        package,
        version,
        SyncPolicy::Interactive(Box::new(TerminalPrompt)),
    )
}

fn run(
    connection: &Connection,
    package: &str,
    version: &str,
    policy: SyncPolicy,
) -> Result<SyncVerdict, CliError> {
    let root = env::current_dir()?;
    let mut engine = SyncEngine::new(connection.client(), root, policy);
    let mut reporter = ConsoleReporter;
    let report = engine.run(package, version, &mut reporter)?;
    output::print_summary(&report);
    Ok(report.verdict())
}
