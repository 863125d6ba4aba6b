//! Implementation of the `stylecfg match` command.
//!
//! Prints `scan` or `skip` for each path, followed by the include pattern
//! that selected it.

use crate::cli::MatchArgs;
use stylecfg::{ContentMatcher, Result, load_file};

pub fn cmd_match(args: MatchArgs) -> Result<()> {
    let doc = load_file(&args.config)?;
    let matcher = ContentMatcher::from_document(&doc)?;

    for path in &args.paths {
        println!("{}", classify(&matcher, path));
    }
    Ok(())
}

fn classify(matcher: &ContentMatcher, path: &str) -> String {
    match matcher.matching_pattern(path) {
        Some(pattern) => format!("scan\t{}\t{}", path, pattern),
        None => format!("skip\t{}", path),
    }
}
