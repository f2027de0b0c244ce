//! The push command: upload a file as a new package version.

use std::fs::File;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use depot::checksum;

use crate::error::CliError;

use super::common::Connection;

/// Upload `file` as a new version of `package` and print the server's
/// response status.
///
/// The file is MD5-hashed up front; the server recomputes the hash over
/// the received body and rejects the upload on a mismatch.
pub fn run(connection: &Connection, package: &str, file: &Path) -> Result<(), CliError> {
    let content_hash = checksum::content_hash(file)?;
    let len = std::fs::metadata(file)?.len();
    let source = File::open(file)?;

    println!("Pushing {} to {}", file.display(), package);
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {bytes}/{total_bytes} ({eta})")
            .expect("valid progress template"),
    );
    let reader = bar.wrap_read(source);

    let status = connection
        .client()
        .upload(package, reader, len, &content_hash)?;
    bar.finish_and_clear();

    println!("{}", status);
    Ok(())
}
