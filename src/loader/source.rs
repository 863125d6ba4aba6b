//! Raw shape of a declarative source, before conversion.
//!
//! Sections whose leaves need key-path errors stay as `serde_yaml::Mapping`
//! and are converted by hand; the rest is plain serde. Unknown keys are
//! collected into `extra` and ignored.

use crate::error::{Result, StyleError};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Text format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    #[default]
    Yaml,
    Json,
}

impl SourceFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SourceDocument {
    pub content: Vec<String>,

    #[serde(rename = "darkMode")]
    pub dark_mode: Option<Value>,

    pub theme: SourceTheme,

    pub plugins: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SourceTheme {
    #[serde(flatten)]
    pub sections: SourceSections,

    pub extend: SourceSections,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SourceSections {
    pub colors: Option<Mapping>,
    pub keyframes: Option<Mapping>,
    pub animation: Option<Mapping>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Parse source text into its raw shape.
///
/// Fails with `ParseError` when the text is not YAML/JSON, when the root
/// is not a mapping, or when a known key holds the wrong kind of node.
/// An empty document is an empty mapping.
pub(crate) fn parse_source(text: &str, format: SourceFormat) -> Result<SourceDocument> {
    let value: Value = match format {
        SourceFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| StyleError::parse(format!("invalid YAML: {}", e)))?,
        SourceFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| StyleError::parse(format!("invalid JSON: {}", e)))?;
            serde_yaml::to_value(json)
                .map_err(|e| StyleError::parse(format!("invalid JSON: {}", e)))?
        }
    };

    match value {
        Value::Null => Ok(SourceDocument::default()),
        Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| StyleError::parse(format!("malformed document: {}", e))),
        other => Err(StyleError::parse(format!(
            "expected a mapping at document root, found {}",
            node_kind(&other)
        ))),
    }
}

/// Human-readable node kind for error messages.
pub(crate) fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
