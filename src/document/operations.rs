//! Read accessors and serialization for ConfigDocument.

use super::model::ConfigDocument;
use super::types::DarkModeStrategy;
use crate::animation::Keyframe;
use crate::error::{Result, StyleError};
use crate::palette::HexColor;

impl ConfigDocument {
    /// The effective dark-mode strategy (`media-query` when undeclared).
    pub fn dark_mode_strategy(&self) -> DarkModeStrategy {
        self.dark_mode.unwrap_or_default()
    }

    /// Look up a colour: `shade = None` reads the unshaded value.
    pub fn color(&self, role: &str, shade: Option<u16>) -> Option<&HexColor> {
        let value = self.color_palette.get(role)?;
        match shade {
            Some(shade) => value.shade(shade),
            None => value.default_value(),
        }
    }

    /// The keyframe set a shorthand binding runs, if the binding exists
    /// and is not `none`.
    pub fn keyframes_for(&self, binding: &str) -> Option<&Keyframe> {
        let name = self.animation_bindings.get(binding)?.keyframes()?;
        self.keyframes.get(name)
    }

    /// Serialize to pretty-printed JSON for the consuming build tool.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StyleError::UserError(format!("failed to serialize document to JSON: {}", e))
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            StyleError::UserError(format!("failed to serialize document to YAML: {}", e))
        })
    }
}
