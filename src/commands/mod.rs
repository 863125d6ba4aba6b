//! Command implementations for stylecfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod defaults;
mod match_paths;
mod resolve;

use crate::cli::Command;
use stylecfg::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Resolve(args) => resolve::cmd_resolve(args),
        Command::Match(args) => match_paths::cmd_match(args),
        Command::Defaults(args) => defaults::cmd_defaults(args),
    }
}
