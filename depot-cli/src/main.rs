//! depot - command-line client for a depot software distribution server.
//!
//! Synchronizes a local directory against versioned packages served over
//! HTTP (`pull`, `verify`, `patch`), uploads new versions (`push`), and
//! lists what the server offers (`remote`).

mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;

use depot::sync::SyncVerdict;

use cli::{Cli, Commands};
use commands::common::Connection;
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    depot::logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    match &cli.command {
        Commands::Pull { package, version } => {
            let connection = Connection::resolve(cli)?;
            connection.banner();
            let verdict = commands::sync::run_pull(&connection, package, version)?;
            Ok(ExitCode::from(exit_code(verdict)))
        }
        Commands::Verify { package, version } => {
            let connection = Connection::resolve(cli)?;
            connection.banner();
            let verdict = commands::sync::run_verify(&connection, package, version)?;
            Ok(ExitCode::from(exit_code(verdict)))
        }
        Commands::Patch { package, version } => {
            let connection = Connection::resolve(cli)?;
            connection.banner();
            let verdict = commands::sync::run_patch(&connection, package, version)?;
            Ok(ExitCode::from(exit_code(verdict)))
        }
        Commands::Push { package, file } => {
            let connection = Connection::resolve(cli)?;
            connection.banner();
            commands::push::run(&connection, package, file)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Remote { package } => {
            let connection = Connection::resolve(cli)?;
            connection.banner();
            match package {
                Some(package) => commands::remote::run_versions(&connection, package)?,
                None => commands::remote::run_packages(&connection)?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init => {
            commands::init::run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Map a sync verdict to the process exit code.
fn exit_code(verdict: SyncVerdict) -> u8 {
    match verdict {
        SyncVerdict::Success => 0,
        SyncVerdict::CompletedWithErrors => 1,
        SyncVerdict::Failed => 2,
    }
}
