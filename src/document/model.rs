//! ConfigDocument struct definition.

use super::types::DarkModeStrategy;
use crate::animation::{AnimationBinding, Keyframe};
use crate::palette::ColorValue;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A resolved style configuration document.
///
/// Built once by loading a source over a base (usually the built-in
/// defaults) and read-only afterwards. Leaf values (hex colours, keyframe
/// offsets, shorthands) are validated by their types; cross-field
/// invariants are checked by [`ConfigDocument::validate`].
///
/// `Default` is the empty document, the identity for
/// [`merge`](crate::merge::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Path patterns of files scanned for class usage. A leading `!` excludes.
    pub content_globs: Vec<String>,

    /// Declared dark-mode strategy; `None` reads as the default.
    #[serde(
        rename = "darkModeStrategy",
        serialize_with = "serialize_dark_mode"
    )]
    pub dark_mode: Option<DarkModeStrategy>,

    /// Colour role name -> single colour or shade scale.
    pub color_palette: BTreeMap<String, ColorValue>,

    /// Animation name -> keyframe set.
    pub keyframes: BTreeMap<String, Keyframe>,

    /// Shorthand name -> parsed shorthand.
    pub animation_bindings: BTreeMap<String, AnimationBinding>,

    /// Plugin identifiers, resolved by the consuming build tool.
    pub plugins: Vec<String>,
}

fn serialize_dark_mode<S: Serializer>(
    value: &Option<DarkModeStrategy>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.unwrap_or_default().serialize(serializer)
}
