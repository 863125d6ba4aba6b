//! Conversion of raw source sections into typed document fields.
//!
//! Every error names the dotted key path of the offending value. Wrong node
//! kinds (a list where a mapping belongs) are parse errors; well-formed but
//! invalid leaves are validation errors.

use super::source::node_kind;
use crate::animation::{
    AnimationBinding, Keyframe, KeyframeOffset, KeyframeStep, is_valid_identifier, is_valid_name,
};
use crate::document::DarkModeStrategy;
use crate::error::{Result, StyleError};
use crate::palette::{ColorValue, DEFAULT_SHADE, HexColor, ShadeKey};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::warn;

static REQUIRE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^require\(\s*['"]([^'"]*)['"]\s*\)$"#).expect("Invalid require() regex")
});

pub(crate) fn child(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

/// Map keys may be strings or, for numeric shade scales, numbers.
fn key_text(key: &Value, path: &str) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(StyleError::parse(format!(
            "{}: keys must be strings, found {}",
            path,
            node_kind(other)
        ))),
    }
}

fn expect_mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping> {
    value.as_mapping().ok_or_else(|| {
        StyleError::parse(format!("{}: expected a mapping, found {}", path, node_kind(value)))
    })
}

/// Scalar leaves become strings; numbers and booleans keep their text.
fn scalar_text(value: &Value, path: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(StyleError::parse(format!(
            "{}: expected a scalar value, found {}",
            path,
            node_kind(other)
        ))),
    }
}

fn hex_leaf(value: &Value, path: &str) -> Result<HexColor> {
    match value {
        Value::String(s) => HexColor::parse(s).map_err(|e| e.at(path)),
        Value::Mapping(_) | Value::Sequence(_) => Err(StyleError::parse(format!(
            "{}: expected a hex colour string, found {}",
            path,
            node_kind(value)
        ))),
        other => Err(StyleError::validation(
            path,
            format!("expected a #RRGGBB hex colour string, found {}", node_kind(other)),
        )),
    }
}

// ============================================================================
// Colours
// ============================================================================

pub(crate) fn colors(section: &Mapping, path: &str) -> Result<BTreeMap<String, ColorValue>> {
    let mut palette = BTreeMap::new();

    for (key, value) in section {
        let role = key_text(key, path)?;
        let role_path = child(path, &role);
        if role.trim().is_empty() {
            return Err(StyleError::validation(role_path, "colour role name is empty"));
        }

        let color = match value {
            Value::Mapping(scale) => color_scale(scale, &role_path)?,
            _ => ColorValue::single(hex_leaf(value, &role_path)?),
        };
        palette.insert(role, color);
    }

    Ok(palette)
}

fn color_scale(scale: &Mapping, path: &str) -> Result<ColorValue> {
    let mut value = ColorValue::default();

    for (key, hex) in scale {
        let shade = key_text(key, path)?;
        let shade_path = child(path, &shade);
        let hex = hex_leaf(hex, &shade_path)?;

        if shade == DEFAULT_SHADE {
            value.default = Some(hex);
            continue;
        }

        let key = ShadeKey::parse(&shade).map_err(|e| e.at(&shade_path))?;
        if !key.is_conventional() {
            warn!(path = %shade_path, "unconventional shade key");
        }
        if value.shades.insert(key, hex).is_some() {
            return Err(StyleError::validation(
                shade_path,
                format!("duplicate shade key {}", key),
            ));
        }
    }

    if value.is_empty() {
        return Err(StyleError::validation(path, "colour scale has no shades"));
    }
    Ok(value)
}

// ============================================================================
// Keyframes and animations
// ============================================================================

pub(crate) fn keyframes(section: &Mapping, path: &str) -> Result<BTreeMap<String, Keyframe>> {
    let mut sets = BTreeMap::new();

    for (key, value) in section {
        let name = key_text(key, path)?;
        let set_path = child(path, &name);
        if !is_valid_name(&name) {
            return Err(StyleError::validation(
                set_path,
                format!("'{}' is not a valid keyframes name", name),
            ));
        }
        sets.insert(name, keyframe_set(expect_mapping(value, &set_path)?, &set_path)?);
    }

    Ok(sets)
}

fn keyframe_set(section: &Mapping, path: &str) -> Result<Keyframe> {
    let mut set = Keyframe::new();

    for (key, value) in section {
        let raw = key_text(key, path)?;
        let offset_path = child(path, &raw);
        let offset = KeyframeOffset::parse(&raw).map_err(|e| e.at(&offset_path))?;

        let mut step = KeyframeStep::new();
        for (property, css) in expect_mapping(value, &offset_path)? {
            let property = key_text(property, &offset_path)?;
            let css = scalar_text(css, &child(&offset_path, &property))?;
            step.insert(property, css);
        }

        if set.contains_key(&offset) {
            return Err(StyleError::validation(
                offset_path,
                format!("duplicate keyframe offset '{}'", offset),
            ));
        }
        set.insert(offset, step);
    }

    Ok(set)
}

pub(crate) fn animations(
    section: &Mapping,
    path: &str,
) -> Result<BTreeMap<String, AnimationBinding>> {
    let mut bindings = BTreeMap::new();

    for (key, value) in section {
        let name = key_text(key, path)?;
        let binding_path = child(path, &name);
        if !is_valid_identifier(&name) {
            return Err(StyleError::validation(
                binding_path,
                format!("'{}' is not a valid animation name", name),
            ));
        }

        let shorthand = match value {
            Value::String(s) => s,
            other => {
                return Err(StyleError::validation(
                    binding_path,
                    format!("expected an animation shorthand string, found {}", node_kind(other)),
                ));
            }
        };
        let binding = AnimationBinding::parse(shorthand).map_err(|e| e.at(&binding_path))?;
        bindings.insert(name, binding);
    }

    Ok(bindings)
}

// ============================================================================
// Top-level scalars and sequences
// ============================================================================

/// `false` and `disabled` disable; `['class', '.selector']` is the class form.
pub(crate) fn dark_mode(value: Option<&Value>) -> Result<Option<DarkModeStrategy>> {
    const PATH: &str = "darkMode";
    let unrecognized = |shown: String| {
        StyleError::validation(
            PATH,
            format!(
                "unrecognized dark mode {} (expected media, class, selector, false, \
                 media-query, explicit-class, or disabled)",
                shown
            ),
        )
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(false)) => Ok(Some(DarkModeStrategy::Disabled)),
        Some(Value::String(s)) => DarkModeStrategy::from_str(s)
            .map(Some)
            .ok_or_else(|| unrecognized(format!("'{}'", s))),
        Some(Value::Sequence(items)) => {
            let first = items.first().and_then(Value::as_str);
            match first.and_then(DarkModeStrategy::from_str) {
                Some(DarkModeStrategy::ExplicitClass) => Ok(Some(DarkModeStrategy::ExplicitClass)),
                _ => Err(unrecognized("list".to_string())),
            }
        }
        Some(other) => Err(unrecognized(node_kind(other).to_string())),
    }
}

pub(crate) fn content_globs(globs: &[String]) -> Result<Vec<String>> {
    globs
        .iter()
        .enumerate()
        .map(|(i, glob)| {
            let glob = glob.trim();
            if glob.trim_start_matches('!').is_empty() {
                Err(StyleError::validation(
                    format!("content[{}]", i),
                    "content pattern is empty",
                ))
            } else {
                Ok(glob.to_string())
            }
        })
        .collect()
}

/// Accepts bare identifiers and the `require('<id>')` form.
pub(crate) fn plugins(plugins: &[String]) -> Result<Vec<String>> {
    plugins
        .iter()
        .enumerate()
        .map(|(i, plugin)| {
            let plugin = plugin.trim();
            let id = REQUIRE_REGEX
                .captures(plugin)
                .and_then(|caps| caps.get(1))
                .map_or(plugin, |m| m.as_str())
                .trim();
            if id.is_empty() {
                Err(StyleError::validation(
                    format!("plugins[{}]", i),
                    "plugin identifier is empty",
                ))
            } else {
                Ok(id.to_string())
            }
        })
        .collect()
}
