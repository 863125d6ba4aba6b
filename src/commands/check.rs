//! Implementation of the `stylecfg check` command.
//!
//! Loads each file over the built-in defaults and prints one summary line
//! per file. Every file is checked even after a failure; the first failure
//! becomes the command's error.

use crate::cli::CheckArgs;
use std::path::Path;
use stylecfg::{ConfigDocument, Result, load_file};

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let mut first_error = None;

    for path in &args.files {
        match load_file(path) {
            Ok(doc) => println!("{}", summarize(path, &doc)),
            Err(err) => {
                println!("{}: FAILED ({})", path.display(), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn summarize(path: &Path, doc: &ConfigDocument) -> String {
    format!(
        "{}: ok ({} colors, {} keyframes, {} animations, {} plugins, dark mode {})",
        path.display(),
        doc.color_palette.len(),
        doc.keyframes.len(),
        doc.animation_bindings.len(),
        doc.plugins.len(),
        doc.dark_mode_strategy()
    )
}
