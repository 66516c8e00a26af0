//! Command-line interface for devpack.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ExplainArgs, LayoutArgs, ResolveArgs, MODE_ENV_VAR,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
