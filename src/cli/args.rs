//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Environment variable consulted when `--mode` is not given.
pub const MODE_ENV_VAR: &str = "DEVPACK_MODE";

/// devpack - Resolve bundler build configuration for a project.
#[derive(Debug, Parser)]
#[command(name = "devpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides .devpack/config.yml layering)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved build configuration
    Resolve(ResolveArgs),

    /// Show the probed project layout
    Layout(LayoutArgs),

    /// List the pipeline stages that apply to a file
    Explain(ExplainArgs),

    /// Print a JSON Schema for the settings file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Build mode: development or production
    #[arg(short, long, env = MODE_ENV_VAR)]
    pub mode: Option<String>,

    /// Print JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `layout` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LayoutArgs {
    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExplainArgs {
    /// File to explain, relative to the project root or absolute
    pub file: PathBuf,

    /// Build mode: development or production
    #[arg(short, long, env = MODE_ENV_VAR)]
    pub mode: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
