//! Command-line interface for playlist-minder.
//!
//! Every command asks on stdin for directories, the service or the album
//! name when they are given neither as arguments nor in the config file.

mod commands;
mod prompt;

pub use commands::{Cli, Commands, run_command};
