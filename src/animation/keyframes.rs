//! Keyframe offsets and keyframe sets.

use crate::error::{Result, StyleError};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// CSS property name -> value for one keyframe step.
pub type KeyframeStep = BTreeMap<String, String>;

/// A named keyframe set: offset -> step.
pub type Keyframe = BTreeMap<KeyframeOffset, KeyframeStep>;

/// A keyframe selector: one or more percentage stops (`"0%"`, `"75%, 100%"`).
///
/// `from` and `to` are normalized to `0%` and `100%`. Ordering follows the
/// first stop numerically so keyframe sets iterate in timeline order.
#[derive(Debug, Clone)]
pub struct KeyframeOffset {
    text: String,
    stops: Vec<f64>,
}

impl KeyframeOffset {
    /// Parse a keyframe selector. Every stop must lie within `[0%, 100%]`.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut stops = Vec::new();

        for raw in value.split(',') {
            let part = raw.trim().to_ascii_lowercase();
            let (text, stop) = match part.as_str() {
                "from" => ("0%".to_string(), 0.0),
                "to" => ("100%".to_string(), 100.0),
                _ => {
                    let stop = parse_percentage(&part).ok_or_else(|| {
                        StyleError::validation(
                            "",
                            format!(
                                "keyframe offset '{}' must be a percentage between 0% and 100%",
                                value.trim()
                            ),
                        )
                    })?;
                    (part, stop)
                }
            };
            parts.push(text);
            stops.push(stop);
        }

        Ok(Self {
            text: parts.join(", "),
            stops,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Percentages this selector applies to, in written order.
    pub fn stops(&self) -> &[f64] {
        &self.stops
    }

    pub fn includes_start(&self) -> bool {
        self.stops.iter().any(|&s| s == 0.0)
    }

    pub fn includes_end(&self) -> bool {
        self.stops.iter().any(|&s| s == 100.0)
    }

    fn first_stop(&self) -> f64 {
        self.stops.first().copied().unwrap_or(0.0)
    }
}

fn parse_percentage(part: &str) -> Option<f64> {
    let number = part.strip_suffix('%')?;
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

impl PartialEq for KeyframeOffset {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for KeyframeOffset {}

impl PartialOrd for KeyframeOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyframeOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first_stop()
            .total_cmp(&other.first_stop())
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for KeyframeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for KeyframeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Whether some step of the set starts the timeline (0%).
pub fn has_start(keyframe: &Keyframe) -> bool {
    keyframe.keys().any(KeyframeOffset::includes_start)
}

/// Whether some step of the set ends the timeline (100%).
pub fn has_end(keyframe: &Keyframe) -> bool {
    keyframe.keys().any(KeyframeOffset::includes_end)
}
