//! Content glob matching: which files the build tool scans for class usage.
//!
//! Patterns use globset syntax with `*` confined to one path segment
//! (`**` crosses directories). A leading `!` turns a pattern into an
//! exclusion that wins over every include.

use crate::document::ConfigDocument;
use crate::error::{Result, StyleError};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

/// Compiled include / exclude glob sets.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    include: GlobSet,
    exclude: GlobSet,
    include_patterns: Vec<String>,
}

impl ContentMatcher {
    /// Compile content patterns. Errors name the offending `content[i]`.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();
        let mut include_patterns = Vec::new();

        for (i, pattern) in patterns.iter().enumerate() {
            let (negated, glob) = compile_glob(pattern).map_err(|e| e.at(&format!("content[{}]", i)))?;
            if negated {
                // An excluded directory also excludes everything beneath it.
                if !glob.glob().ends_with("/**") {
                    let below = descendants_of(&glob).map_err(|e| e.at(&format!("content[{}]", i)))?;
                    exclude.add(below);
                }
                exclude.add(glob);
            } else {
                include.add(glob);
                include_patterns.push(pattern.clone());
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|e| {
                StyleError::validation("content", format!("failed to compile content globs: {}", e))
            })
        };

        Ok(Self {
            include: build(include)?,
            exclude: build(exclude)?,
            include_patterns,
        })
    }

    pub fn from_document(doc: &ConfigDocument) -> Result<Self> {
        Self::new(&doc.content_globs)
    }

    /// Whether `path` is selected: it matches an include and no exclude.
    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.include.is_match(&path) && !self.exclude.is_match(&path)
    }

    /// The first include pattern selecting `path`, if it is selected.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        let path = normalize_path(path);
        if self.exclude.is_match(&path) {
            return None;
        }
        let first = *self.include.matches(&path).first()?;
        self.include_patterns.get(first).map(String::as_str)
    }
}

/// Compile one content pattern, returning whether it is an exclusion.
///
/// The error carries an empty key path for the caller to anchor.
pub(crate) fn compile_glob(pattern: &str) -> Result<(bool, Glob)> {
    let trimmed = pattern.trim();
    let (negated, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let body = normalize_path(body);
    if body.is_empty() {
        return Err(StyleError::validation("", "content pattern is empty"));
    }

    let glob = GlobBuilder::new(&body)
        .literal_separator(true)
        .build()
        .map_err(|e| {
            StyleError::validation("", format!("invalid glob pattern '{}': {}", pattern, e))
        })?;
    Ok((negated, glob))
}

fn descendants_of(glob: &Glob) -> Result<Glob> {
    let pattern = format!("{}/**", glob.glob().trim_end_matches('/'));
    GlobBuilder::new(&pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| {
            StyleError::validation("", format!("invalid glob pattern '{}': {}", pattern, e))
        })
}

fn normalize_path(path: &str) -> String {
    let normalized = path.trim().replace('\\', "/");
    match normalized.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}
