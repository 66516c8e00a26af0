//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and carries the global project
//! root and settings override.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod explain;
pub mod layout;
pub mod resolve;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
