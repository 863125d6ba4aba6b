//! Loading declarative sources into resolved documents.
//!
//! A source is resolved over a base document in three steps:
//!
//! 1. `theme.<section>` replaces the base's section of the same name.
//! 2. `theme.extend.<section>` is deep-merged into the result.
//! 3. `content`, `darkMode` and `plugins` are merged on top.
//!
//! The result is validated as a whole before it is returned, so a loader
//! either yields a complete valid document or fails. Errors found at that
//! point name `theme.extend.<section>.<name>` when the entry came from this
//! source's `extend` block, and `theme.<section>.<name>` otherwise.

mod convert;
mod source;

#[cfg(test)]
mod tests;

pub use source::SourceFormat;

use crate::document::ConfigDocument;
use crate::error::{Result, StyleError};
use crate::merge::merge;
use source::{SourceSections, parse_source};
use std::path::Path;
use tracing::{debug, info};

/// Resolves sources over a base document.
#[derive(Debug, Clone)]
pub struct Loader {
    base: ConfigDocument,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Resolve over the built-in defaults.
    pub fn new() -> Self {
        Self::with_base(ConfigDocument::builtin())
    }

    /// Resolve over an empty document.
    pub fn bare() -> Self {
        Self::with_base(ConfigDocument::default())
    }

    /// Resolve over a caller-supplied document.
    pub fn with_base(base: ConfigDocument) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &ConfigDocument {
        &self.base
    }

    /// Load and resolve source text.
    pub fn load_str(&self, text: &str, format: SourceFormat) -> Result<ConfigDocument> {
        let source = parse_source(text, format)?;

        for key in source.extra.keys() {
            debug!(key = %key, "ignoring unsupported top-level key");
        }

        let mut doc = self.base.clone();
        replace_sections(&mut doc, &source.theme.sections, "theme")?;

        let extend = sections_layer(&source.theme.extend, "theme.extend")?;
        doc = merge(&doc, &extend);

        let top = ConfigDocument {
            content_globs: convert::content_globs(&source.content)?,
            dark_mode: convert::dark_mode(source.dark_mode.as_ref())?,
            plugins: convert::plugins(&source.plugins)?,
            ..ConfigDocument::default()
        };
        doc = merge(&doc, &top);

        doc.validate()
            .map_err(|e| anchor_to_source(e, &source.theme.extend))?;
        Ok(doc)
    }

    /// Load and resolve a file. The format follows the file extension.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ConfigDocument> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|e| {
            StyleError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let doc = self.load_str(&text, SourceFormat::from_path(path))?;
        info!(
            path = %path.display(),
            colors = doc.color_palette.len(),
            keyframes = doc.keyframes.len(),
            animations = doc.animation_bindings.len(),
            "loaded style configuration"
        );
        Ok(doc)
    }
}

fn replace_sections(doc: &mut ConfigDocument, sections: &SourceSections, path: &str) -> Result<()> {
    log_ignored(sections, path);

    if let Some(colors) = &sections.colors {
        doc.color_palette = convert::colors(colors, &convert::child(path, "colors"))?;
    }
    if let Some(keyframes) = &sections.keyframes {
        doc.keyframes = convert::keyframes(keyframes, &convert::child(path, "keyframes"))?;
    }
    if let Some(animation) = &sections.animation {
        doc.animation_bindings = convert::animations(animation, &convert::child(path, "animation"))?;
    }
    Ok(())
}

fn sections_layer(sections: &SourceSections, path: &str) -> Result<ConfigDocument> {
    let mut layer = ConfigDocument::default();
    replace_sections(&mut layer, sections, path)?;
    Ok(layer)
}

/// Point a document-level error at `theme.extend.<section>.<name>` when that
/// is where this source declared the offending entry.
fn anchor_to_source(err: StyleError, extend: &SourceSections) -> StyleError {
    let (path, message) = match err {
        StyleError::ValidationError { path, message } => (path, message),
        other => return other,
    };

    let declared_in_extend = [
        ("theme.colors.", &extend.colors),
        ("theme.keyframes.", &extend.keyframes),
        ("theme.animation.", &extend.animation),
    ]
    .into_iter()
    .any(|(prefix, section)| {
        path.strip_prefix(prefix)
            .zip(section.as_ref())
            .is_some_and(|(name, entries)| entries.contains_key(name))
    });

    let path = match path.strip_prefix("theme.") {
        Some(rest) if declared_in_extend => format!("theme.extend.{}", rest),
        _ => path,
    };
    StyleError::ValidationError { path, message }
}

fn log_ignored(sections: &SourceSections, path: &str) {
    for key in sections.extra.keys().filter(|k| k.as_str() != "extend") {
        debug!(key = %convert::child(path, key), "ignoring unsupported theme section");
    }
}

/// Load YAML source text over the built-in defaults.
///
/// # Arguments
///
/// * `source` - YAML (or JSON) text of a configuration source
///
/// # Returns
///
/// The resolved, validated document, or a `ParseError` / `ValidationError`
/// naming the offending key path.
pub fn load(source: &str) -> Result<ConfigDocument> {
    Loader::new().load_str(source, SourceFormat::Yaml)
}

/// Load a YAML or JSON file over the built-in defaults.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    Loader::new().load_file(path)
}
