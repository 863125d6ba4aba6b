//! Enumerations used by the configuration document.

use serde::Serialize;
use std::fmt;

/// How dark-mode variants are generated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DarkModeStrategy {
    /// Follow the `prefers-color-scheme` media query (default).
    #[default]
    MediaQuery,
    /// Toggle via an explicit class / selector on an ancestor element.
    ExplicitClass,
    /// Do not generate dark-mode variants.
    Disabled,
}

impl DarkModeStrategy {
    /// Parse a dark-mode strategy from its source spelling.
    ///
    /// Accepts the canonical names and the short forms found in
    /// configuration files (`media`, `class`, `selector`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "media" | "media-query" => Some(Self::MediaQuery),
            "class" | "selector" | "explicit-class" => Some(Self::ExplicitClass),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MediaQuery => "media-query",
            Self::ExplicitClass => "explicit-class",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
