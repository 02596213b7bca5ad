//! Command-line interface module
//!
//! This module provides the CLI for the config script generator:
//!
//! - `autoexec init` - Write a default form snapshot and `autoexec.toml`
//! - `autoexec check` - Validate a form snapshot
//! - `autoexec preview` - Print the generated script
//! - `autoexec generate` - Write the generated script to disk
//! - `autoexec preset` - Apply a quick selection preset
//! - `autoexec derive` - Recompute parent and per-key flags

mod commands;

pub use commands::{run, Cli, CliError, Commands, SNAPSHOT_FILE};
