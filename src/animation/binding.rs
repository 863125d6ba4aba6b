//! Parser for animation shorthand bindings.
//!
//! A binding reads like the CSS `animation` shorthand:
//!
//! ```text
//! pulse-ring 1.5s cubic-bezier(0.4, 0, 0.6, 1) infinite
//! ^name      ^dur ^timing function              ^iteration count
//! ```
//!
//! The keyframe name comes first. The remaining tokens may appear in any
//! order: a duration (required), a second time value (delay), a timing
//! function, an iteration count, and direction / fill-mode / play-state
//! keywords. The literal `none` disables animation.

use crate::error::{Result, StyleError};
use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("Invalid animation name regex")
});

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)(ms|s)$").expect("Invalid CSS time regex")
});

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)$").expect("Invalid number regex"));

const TIMING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

const STEP_POSITIONS: &[&str] = &[
    "jump-start",
    "jump-end",
    "jump-none",
    "jump-both",
    "start",
    "end",
];

const MODIFIER_KEYWORDS: &[&str] = &[
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "forwards",
    "backwards",
    "both",
    "running",
    "paused",
];

/// Whether `name` is usable as a shorthand binding name.
pub fn is_valid_identifier(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Whether `name` is usable as a keyframe set name. `none` is reserved.
pub fn is_valid_name(name: &str) -> bool {
    is_valid_identifier(name) && name != "none"
}

/// A CSS time value (`0.3s`, `150ms`), kept in its written form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssTime {
    text: String,
    duration: Duration,
}

impl CssTime {
    /// Parse a time token; `None` when the token is not a time value.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = TIME_REGEX.captures(token)?;
        let amount: f64 = caps[1].parse().ok()?;
        let nanos_per_unit = if &caps[2] == "ms" { 1e6 } else { 1e9 };
        let nanos = (amount * nanos_per_unit).round();
        if !nanos.is_finite() || nanos > u64::MAX as f64 {
            return None;
        }
        let duration = Duration::from_nanos(nanos as u64);
        Some(Self {
            text: token.to_string(),
            duration,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for CssTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A validated easing function in its written form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingFunction(String);

impl TimingFunction {
    /// Parse a timing function token.
    ///
    /// Returns `Ok(None)` when the token is not a timing function at all, and
    /// an error when it is one but is malformed (e.g. a three-argument
    /// `cubic-bezier`).
    pub fn parse(token: &str) -> Result<Option<Self>> {
        if TIMING_KEYWORDS.contains(&token) {
            return Ok(Some(Self(token.to_string())));
        }

        if let Some(args) = function_args(token, "cubic-bezier") {
            let points = parse_numbers(&args).filter(|p| p.len() == 4).ok_or_else(|| {
                StyleError::validation(
                    "",
                    format!("'{}' must have four numeric arguments", token),
                )
            })?;
            if !(0.0..=1.0).contains(&points[0]) || !(0.0..=1.0).contains(&points[2]) {
                return Err(StyleError::validation(
                    "",
                    format!("'{}' x coordinates must be between 0 and 1", token),
                ));
            }
            return Ok(Some(Self(token.to_string())));
        }

        if let Some(args) = function_args(token, "steps") {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            let count_ok = parts
                .first()
                .and_then(|c| c.parse::<u32>().ok())
                .is_some_and(|c| c > 0);
            let position_ok = match parts.get(1) {
                None => true,
                Some(p) => STEP_POSITIONS.contains(p),
            };
            if !count_ok || !position_ok || parts.len() > 2 {
                return Err(StyleError::validation(
                    "",
                    format!("'{}' must be steps(<positive integer>[, <position>])", token),
                ));
            }
            return Ok(Some(Self(token.to_string())));
        }

        Ok(None)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Control points of a `cubic-bezier(...)` function.
    pub fn control_points(&self) -> Option<[f64; 4]> {
        let args = function_args(&self.0, "cubic-bezier")?;
        let points = parse_numbers(&args)?;
        points.try_into().ok()
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn function_args(token: &str, name: &str) -> Option<String> {
    let rest = token.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.to_string())
}

fn parse_numbers(args: &str) -> Option<Vec<f64>> {
    args.split(',')
        .map(|a| a.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// How many times an animation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationCount {
    Infinite,
    /// A non-negative count in its written form (e.g. `3`, `0.5`).
    Times(String),
}

impl IterationCount {
    fn parse(token: &str) -> Option<Self> {
        if token == "infinite" {
            Some(Self::Infinite)
        } else if NUMBER_REGEX.is_match(token) {
            Some(Self::Times(token.to_string()))
        } else {
            None
        }
    }

    /// The finite count, or `None` for `infinite`.
    pub fn times(&self) -> Option<f64> {
        match self {
            Self::Infinite => None,
            Self::Times(text) => text.parse().ok(),
        }
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinite => f.write_str("infinite"),
            Self::Times(text) => f.write_str(text),
        }
    }
}

/// A parsed animation that runs a keyframe set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRun {
    pub keyframes: String,
    pub duration: CssTime,
    pub timing_function: Option<TimingFunction>,
    pub delay: Option<CssTime>,
    pub iteration_count: Option<IterationCount>,
    /// Direction, fill-mode and play-state keywords in written order.
    pub modifiers: Vec<String>,
}

/// A shorthand binding: either `none` or an animation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationBinding {
    None,
    Run(AnimationRun),
}

impl AnimationBinding {
    /// Parse a shorthand string.
    ///
    /// Errors carry an empty key path; the loader anchors them.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(StyleError::validation("", "animation shorthand is empty"));
        }
        if trimmed == "none" {
            return Ok(Self::None);
        }

        let tokens = tokenize(trimmed)?;
        let (name, rest) = tokens
            .split_first()
            .ok_or_else(|| StyleError::validation("", "animation shorthand is empty"))?;

        if !is_valid_name(name) {
            return Err(StyleError::validation(
                "",
                format!("'{}' must start with a keyframes name, found '{}'", trimmed, name),
            ));
        }

        let mut duration = None;
        let mut delay = None;
        let mut timing_function = None;
        let mut iteration_count = None;
        let mut modifiers = Vec::new();

        for token in rest {
            if let Some(time) = CssTime::parse(token) {
                if duration.is_none() {
                    duration = Some(time);
                } else if delay.is_none() {
                    delay = Some(time);
                } else {
                    return Err(StyleError::validation(
                        "",
                        format!("'{}' has more than two time values", trimmed),
                    ));
                }
            } else if let Some(timing) = TimingFunction::parse(token)? {
                if timing_function.replace(timing).is_some() {
                    return Err(StyleError::validation(
                        "",
                        format!("'{}' has more than one timing function", trimmed),
                    ));
                }
            } else if let Some(count) = IterationCount::parse(token) {
                if iteration_count.replace(count).is_some() {
                    return Err(StyleError::validation(
                        "",
                        format!("'{}' has more than one iteration count", trimmed),
                    ));
                }
            } else if MODIFIER_KEYWORDS.contains(&token.as_str()) {
                modifiers.push(token.clone());
            } else {
                return Err(StyleError::validation(
                    "",
                    format!("unrecognized token '{}' in '{}'", token, trimmed),
                ));
            }
        }

        let duration = duration.ok_or_else(|| {
            StyleError::validation("", format!("'{}' is missing a duration", trimmed))
        })?;

        Ok(Self::Run(AnimationRun {
            keyframes: name.clone(),
            duration,
            timing_function,
            delay,
            iteration_count,
            modifiers,
        }))
    }

    /// Name of the keyframe set this binding runs, if any.
    pub fn keyframes(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Run(run) => Some(&run.keyframes),
        }
    }
}

/// Split on whitespace outside parentheses.
fn tokenize(value: &str) -> Result<Vec<String>> {
    let unbalanced = || {
        StyleError::validation("", format!("unbalanced parentheses in '{}'", value))
    };

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in value.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(unbalanced)?;
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if depth != 0 {
        return Err(unbalanced());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

impl fmt::Display for AnimationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = match self {
            Self::None => return f.write_str("none"),
            Self::Run(run) => run,
        };

        write!(f, "{} {}", run.keyframes, run.duration)?;
        if let Some(timing) = &run.timing_function {
            write!(f, " {}", timing)?;
        }
        if let Some(delay) = &run.delay {
            write!(f, " {}", delay)?;
        }
        if let Some(count) = &run.iteration_count {
            write!(f, " {}", count)?;
        }
        for modifier in &run.modifiers {
            write!(f, " {}", modifier)?;
        }
        Ok(())
    }
}

impl Serialize for AnimationBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
