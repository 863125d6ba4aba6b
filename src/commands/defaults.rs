//! Implementation of the `stylecfg defaults` command.

use crate::cli::DefaultsArgs;
use stylecfg::output::render;
use stylecfg::{ConfigDocument, Result};

pub fn cmd_defaults(args: DefaultsArgs) -> Result<()> {
    print!("{}", render(&ConfigDocument::builtin(), args.format)?);
    Ok(())
}
