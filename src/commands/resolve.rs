//! Implementation of the `stylecfg resolve` command.
//!
//! Each overlay is loaded over the document resolved so far, so its
//! `theme.*` sections replace and its `theme.extend.*` sections merge, and
//! its animation bindings may refer to keyframes from earlier sources.

use crate::cli::ResolveArgs;
use stylecfg::output::{render, write_document};
use stylecfg::{ConfigDocument, Loader, Result};
use tracing::info;

pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let doc = resolve_document(&args)?;

    match &args.output {
        Some(path) => {
            write_document(path, &doc, args.format)?;
            info!(path = %path.display(), "wrote resolved document");
        }
        None => print!("{}", render(&doc, args.format)?),
    }
    Ok(())
}

fn resolve_document(args: &ResolveArgs) -> Result<ConfigDocument> {
    let loader = if args.no_defaults {
        Loader::bare()
    } else {
        Loader::new()
    };

    let mut doc = loader.load_file(&args.file)?;
    for overlay in &args.overlays {
        doc = Loader::with_base(doc).load_file(overlay)?;
    }
    Ok(doc)
}
