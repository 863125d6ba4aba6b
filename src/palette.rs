//! Colour tokens: hex values, shade keys, and palette entries.
//!
//! A palette entry is either a single hex string or a scale of numbered
//! shades. A single string is stored as the `DEFAULT` entry of an empty
//! scale, which keeps merging a plain map-union.

use crate::error::{Result, StyleError};
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex colour regex"));

/// Shade keys a palette scale is conventionally drawn from.
pub const CONVENTIONAL_SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Key that holds a palette entry's unshaded value.
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// Check that `value` is a `#RRGGBB` hex colour.
///
/// The returned error carries an empty key path; callers anchor it with
/// [`StyleError::at`].
pub fn validate_hex(value: &str) -> Result<()> {
    if HEX_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(StyleError::validation(
            "",
            format!("'{}' is not a #RRGGBB hex colour", value),
        ))
    }
}

/// A validated `#RRGGBB` colour. Case is preserved as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self> {
        validate_hex(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Numeric shade key within a palette scale (e.g. `500`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShadeKey(u16);

impl ShadeKey {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Parse a shade key from its textual form.
    pub fn parse(value: &str) -> Result<Self> {
        value.trim().parse::<u16>().map(Self).map_err(|_| {
            StyleError::validation(
                "",
                format!("shade key '{}' must be a number or '{}'", value, DEFAULT_SHADE),
            )
        })
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Whether this key is one of the conventional 50-900 shades.
    pub fn is_conventional(self) -> bool {
        CONVENTIONAL_SHADES.contains(&self.0)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A palette entry: an optional unshaded value plus numbered shades.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorValue {
    pub(crate) default: Option<HexColor>,
    pub(crate) shades: BTreeMap<ShadeKey, HexColor>,
}

impl ColorValue {
    /// A single colour with no shade scale.
    pub fn single(hex: HexColor) -> Self {
        Self {
            default: Some(hex),
            shades: BTreeMap::new(),
        }
    }

    /// A shade scale with no unshaded value.
    pub fn scale(shades: impl IntoIterator<Item = (ShadeKey, HexColor)>) -> Self {
        Self {
            default: None,
            shades: shades.into_iter().collect(),
        }
    }

    /// Set the unshaded (`DEFAULT`) value.
    pub fn with_default(mut self, hex: HexColor) -> Self {
        self.default = Some(hex);
        self
    }

    pub fn default_value(&self) -> Option<&HexColor> {
        self.default.as_ref()
    }

    pub fn shade(&self, key: u16) -> Option<&HexColor> {
        self.shades.get(&ShadeKey(key))
    }

    pub fn shades(&self) -> &BTreeMap<ShadeKey, HexColor> {
        &self.shades
    }

    /// True when the entry is a plain hex string with no scale.
    pub fn is_single(&self) -> bool {
        self.default.is_some() && self.shades.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.shades.is_empty()
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if let (Some(hex), true) = (&self.default, self.shades.is_empty()) {
            return hex.serialize(serializer);
        }

        let len = self.shades.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(hex) = &self.default {
            map.serialize_entry(DEFAULT_SHADE, hex)?;
        }
        for (key, hex) in &self.shades {
            map.serialize_entry(&key.to_string(), hex)?;
        }
        map.end()
    }
}
