//! Document-level validation.
//!
//! Leaf values are valid by construction; this checks the invariants that
//! span fields and hold for merged documents as well as loaded ones.

use crate::animation::{has_end, has_start};
use crate::content::compile_glob;
use crate::document::ConfigDocument;
use crate::error::{Result, StyleError};
use tracing::warn;

impl ConfigDocument {
    /// Validate cross-field invariants.
    ///
    /// Validation rules:
    /// - every content pattern compiles as a glob
    /// - plugin identifiers are non-empty
    /// - palette entries define at least one value
    /// - keyframe sets are non-empty (a set without a 0% or 100% stop is
    ///   only warned about)
    /// - every animation binding references an existing keyframe set
    pub fn validate(&self) -> Result<()> {
        for (i, pattern) in self.content_globs.iter().enumerate() {
            compile_glob(pattern).map_err(|e| e.at(&format!("content[{}]", i)))?;
        }

        for (i, plugin) in self.plugins.iter().enumerate() {
            if plugin.trim().is_empty() {
                return Err(StyleError::validation(
                    format!("plugins[{}]", i),
                    "plugin identifier is empty",
                ));
            }
        }

        for (role, color) in &self.color_palette {
            if color.is_empty() {
                return Err(StyleError::validation(
                    format!("theme.colors.{}", role),
                    "colour has no values",
                ));
            }
        }

        for (name, keyframe) in &self.keyframes {
            if keyframe.is_empty() {
                return Err(StyleError::validation(
                    format!("theme.keyframes.{}", name),
                    "keyframe set has no steps",
                ));
            }
            if !has_start(keyframe) || !has_end(keyframe) {
                warn!(keyframes = %name, "keyframe set lacks a 0% or 100% step");
            }
        }

        for (name, binding) in &self.animation_bindings {
            if let Some(target) = binding.keyframes()
                && !self.keyframes.contains_key(target)
            {
                return Err(StyleError::validation(
                    format!("theme.animation.{}", name),
                    format!("references unknown keyframes '{}'", target),
                ));
            }
        }

        Ok(())
    }
}
