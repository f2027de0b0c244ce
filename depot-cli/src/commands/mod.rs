//! CLI command implementations.

pub mod common;
pub mod init;
pub mod push;
pub mod remote;
pub mod sync;
