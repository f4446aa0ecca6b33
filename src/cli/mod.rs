//! Command-line interface for playfetch.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FetchArgs, MetadataArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
