//! stylecfg: loader, merger, and validator for declarative style
//! configuration documents.
//!
//! A source document declares content globs, a dark-mode strategy, a colour
//! palette, keyframes, animation shorthands, and plugins. Loading resolves
//! it over built-in defaults (`theme.*` replaces a default section,
//! `theme.extend.*` merges into it) and validates the result; merging
//! composes documents deterministically.
//!
//! ```
//! let doc = stylecfg::load(r##"
//! darkMode: class
//! theme:
//!   extend:
//!     colors:
//!       primary:
//!         500: "#D4AF37"
//! "##).unwrap();
//!
//! assert_eq!(doc.dark_mode_strategy(), stylecfg::DarkModeStrategy::ExplicitClass);
//! assert_eq!(doc.color("primary", Some(500)).unwrap().as_str(), "#D4AF37");
//! ```

pub mod animation;
pub mod content;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod output;
pub mod palette;
mod validate;

pub use content::ContentMatcher;
pub use document::{ConfigDocument, DarkModeStrategy};
pub use error::{Result, StyleError};
pub use loader::{Loader, SourceFormat, load, load_file};
pub use merge::{Merge, merge, merge_all};
pub use palette::{ColorValue, HexColor, validate_hex};
