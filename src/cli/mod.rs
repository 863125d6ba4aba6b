//! CLI argument parsing for stylecfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stylecfg::logging::LogLevel;
use stylecfg::output::OutputFormat;

/// stylecfg: load, merge, and validate declarative style configuration.
///
/// A source declares content globs, a dark-mode strategy, a colour palette,
/// keyframes, animation shorthands, and plugins. `theme.*` sections replace
/// the built-in defaults; `theme.extend.*` sections merge into them.
#[derive(Parser, Debug)]
#[command(name = "stylecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (overrides STYLECFG_LOG).
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stylecfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate configuration files.
    ///
    /// Prints a one-line summary per file. Every file is checked; the exit
    /// code reflects the first failure.
    Check(CheckArgs),

    /// Print or write a resolved configuration document.
    ///
    /// Overlays are applied left to right on top of the first file.
    Resolve(ResolveArgs),

    /// Report whether paths are scanned by a configuration's content globs.
    Match(MatchArgs),

    /// Print the built-in defaults.
    Defaults(DefaultsArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration files (YAML, or JSON with a .json extension).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Configuration file to resolve.
    pub file: PathBuf,

    /// Additional sources applied on top, in order.
    #[arg(long = "overlay", value_name = "FILE")]
    pub overlays: Vec<PathBuf>,

    /// Resolve over an empty document instead of the built-in defaults.
    #[arg(long)]
    pub no_defaults: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this path (atomically) instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Configuration file whose content globs are used.
    pub config: PathBuf,

    /// Paths to classify.
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
