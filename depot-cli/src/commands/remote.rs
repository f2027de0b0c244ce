//! The remote command: list packages and versions on the server.

use crate::error::CliError;

use super::common::Connection;

const RULE: &str = "------------------------------------------";

/// List all packages on the server.
pub fn run_packages(connection: &Connection) -> Result<(), CliError> {
    println!("Remote Packages");
    println!("{}", RULE);
    for package in connection.client().list_packages()? {
        println!("{}", package.name);
    }
    println!();
    Ok(())
}

/// List all versions of one package.
pub fn run_versions(connection: &Connection, package: &str) -> Result<(), CliError> {
    println!("Remote Versions of: {}", package);
    println!("{}", RULE);
    for version in connection.client().list_versions(package)? {
        println!(
            "Version: {} Release-Date: {} Size: {}",
            version.name, version.date, version.size
        );
    }
    println!();
    Ok(())
}
