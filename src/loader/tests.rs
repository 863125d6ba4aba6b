//! Tests for source loading and resolution.

use super::*;
use crate::animation::{AnimationBinding, IterationCount, KeyframeOffset};
use crate::document::DarkModeStrategy;
use crate::palette::HexColor;
use serde_yaml::Value;

const GOLD: &str = include_str!("../../themes/nebue-gold.yaml");
const VIOLET: &str = include_str!("../../themes/violet-indigo.yaml");

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn validation_path(err: StyleError) -> String {
    match err {
        StyleError::ValidationError { path, .. } => path,
        other => panic!("expected a validation error, got {:?}", other),
    }
}

fn assert_parse_error(source: &str) {
    match load(source) {
        Err(StyleError::ParseError(_)) => {}
        other => panic!("expected a parse error for {:?}, got {:?}", source, other),
    }
}

/// Remove `theme.extend.keyframes.<name>` from a YAML source.
fn without_keyframes(source: &str, name: &str) -> String {
    let mut value: Value = serde_yaml::from_str(source).unwrap();
    value["theme"]["extend"]["keyframes"]
        .as_mapping_mut()
        .unwrap()
        .remove(name)
        .unwrap();
    serde_yaml::to_string(&value).unwrap()
}

// ============================================================================
// Theme documents
// ============================================================================

#[test]
fn test_load_gold_theme() {
    let doc = load(GOLD).unwrap();

    assert_eq!(doc.dark_mode_strategy(), DarkModeStrategy::MediaQuery);
    assert_eq!(doc.dark_mode, None);
    assert_eq!(doc.color("primary", Some(500)), Some(&hex("#D4AF37")));
    assert_eq!(doc.color("accent", Some(600)), Some(&hex("#E6C75A")));
    assert_eq!(doc.color("bg-primary", None), Some(&hex("#0f172a")));
    assert!(doc.color_palette["success"].is_single());

    // theme.extend keeps the defaults.
    assert!(doc.color_palette.contains_key("slate"));
    assert!(doc.keyframes.contains_key("spin"));

    let slide = doc.keyframes_for("slide-in-right").unwrap();
    assert_eq!(slide.len(), 2);

    assert_eq!(doc.content_globs.len(), 3);
    assert_eq!(
        doc.plugins,
        vec![
            "@tailwindcss/forms",
            "@tailwindcss/typography",
            "@tailwindcss/aspect-ratio"
        ]
    );
}

#[test]
fn test_load_violet_theme_with_class_dark_mode() {
    let doc = load(VIOLET).unwrap();

    assert_eq!(doc.dark_mode_strategy(), DarkModeStrategy::ExplicitClass);
    assert_eq!(doc.color("primary", Some(600)), Some(&hex("#7c3aed")));
    assert_eq!(doc.content_globs.len(), 4);
    assert!(doc.content_globs.contains(&"!../../**/node_modules".to_string()));
}

#[test]
fn test_pulse_ring_loads() {
    let doc = load(VIOLET).unwrap();

    match &doc.animation_bindings["pulse-ring"] {
        AnimationBinding::Run(run) => {
            assert_eq!(run.keyframes, "pulse-ring");
            assert_eq!(run.iteration_count, Some(IterationCount::Infinite));
        }
        other => panic!("unexpected binding {:?}", other),
    }
    assert!(doc.keyframes_for("pulse-ring").is_some());
}

#[test]
fn test_removing_referenced_keyframes_fails_reload() {
    let source = without_keyframes(VIOLET, "pulse-ring");
    let err = load(&source).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    assert_eq!(validation_path(err), "theme.extend.animation.pulse-ring");

    let source = without_keyframes(GOLD, "slide-in-right");
    let err = load(&source).unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.slide-in-right");
}

// ============================================================================
// Replace vs extend
// ============================================================================

#[test]
fn test_theme_section_replaces_defaults() {
    let doc = load(
        r##"
theme:
  colors:
    brand: "#D4AF37"
"##,
    )
    .unwrap();

    assert_eq!(doc.color_palette.len(), 1);
    assert!(!doc.color_palette.contains_key("slate"));
    // Other default sections are untouched.
    assert!(doc.keyframes.contains_key("spin"));
}

#[test]
fn test_replacing_keyframes_orphans_default_animations() {
    let err = load(
        r#"
theme:
  keyframes:
    fade:
      from: { opacity: "0" }
      to: { opacity: "1" }
"#,
    )
    .unwrap_err();
    assert_eq!(validation_path(err), "theme.animation.bounce");

    let doc = load(
        r#"
theme:
  keyframes:
    fade:
      from: { opacity: "0" }
      to: { opacity: "1" }
  animation:
    fade: "fade 200ms ease-in"
"#,
    )
    .unwrap();
    assert_eq!(doc.keyframes.len(), 1);
    assert_eq!(doc.animation_bindings.len(), 1);
}

#[test]
fn test_dangling_reference_names_declaring_section() {
    let err = load("theme:\n  animation:\n    wiggle: \"wiggle 1s\"\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.animation.wiggle");

    let err = load("theme:\n  extend:\n    animation:\n      wiggle: \"wiggle 1s\"\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.wiggle");

    // Declared in both: the extend entry is the one that survives.
    let err = load(
        "theme:\n  animation:\n    wiggle: \"spin 1s\"\n  extend:\n    animation:\n      wiggle: \"wiggle 1s\"\n",
    )
    .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.wiggle");
}

#[test]
fn test_loader_base() {
    assert_eq!(Loader::new().base(), &ConfigDocument::builtin());
    assert_eq!(Loader::bare().base(), &ConfigDocument::default());
    assert_eq!(Loader::default().base(), &ConfigDocument::builtin());
}

#[test]
fn test_extend_wins_over_theme_in_same_source() {
    let doc = load(
        r##"
theme:
  colors:
    primary:
      500: "#111111"
      600: "#222222"
  extend:
    colors:
      primary:
        500: "#333333"
"##,
    )
    .unwrap();

    assert_eq!(doc.color("primary", Some(500)), Some(&hex("#333333")));
    assert_eq!(doc.color("primary", Some(600)), Some(&hex("#222222")));
}

#[test]
fn test_with_base_resolves_references_against_base() {
    let base = load(VIOLET).unwrap();
    let overlay = r#"
theme:
  extend:
    animation:
      ring-slow: "pulse-ring 3s linear infinite"
"#;

    let doc = Loader::with_base(base)
        .load_str(overlay, SourceFormat::Yaml)
        .unwrap();
    assert!(doc.keyframes_for("ring-slow").is_some());

    let err = Loader::bare()
        .load_str(overlay, SourceFormat::Yaml)
        .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.ring-slow");
}

#[test]
fn test_empty_source_yields_base() {
    assert_eq!(load("").unwrap(), ConfigDocument::builtin());
    assert_eq!(load("{}").unwrap(), ConfigDocument::builtin());
    assert_eq!(
        Loader::bare().load_str("", SourceFormat::Yaml).unwrap(),
        ConfigDocument::default()
    );
}

// ============================================================================
// Dark mode
// ============================================================================

#[test]
fn test_dark_mode_spellings() {
    let cases = [
        ("darkMode: media", DarkModeStrategy::MediaQuery),
        ("darkMode: media-query", DarkModeStrategy::MediaQuery),
        ("darkMode: class", DarkModeStrategy::ExplicitClass),
        ("darkMode: selector", DarkModeStrategy::ExplicitClass),
        ("darkMode: explicit-class", DarkModeStrategy::ExplicitClass),
        ("darkMode: ['class', '.theme-dark']", DarkModeStrategy::ExplicitClass),
        ("darkMode: false", DarkModeStrategy::Disabled),
        ("darkMode: disabled", DarkModeStrategy::Disabled),
    ];

    for (source, expected) in cases {
        let doc = load(source).unwrap();
        assert_eq!(doc.dark_mode, Some(expected), "source: {}", source);
    }
}

#[test]
fn test_unrecognized_dark_mode() {
    for source in [
        "darkMode: night",
        "darkMode: true",
        "darkMode: 3",
        "darkMode: ['media']",
        "darkMode: []",
    ] {
        let err = load(source).unwrap_err();
        assert_eq!(validation_path(err), "darkMode", "source: {}", source);
    }
}

// ============================================================================
// Colours
// ============================================================================

#[test]
fn test_malformed_hex_names_key_path() {
    let err = load(
        r##"
theme:
  extend:
    colors:
      primary:
        500: "#D4AF3"
"##,
    )
    .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.colors.primary.500");

    let err = load("theme:\n  colors:\n    brand: 123456\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.colors.brand");
}

#[test]
fn test_default_shade_and_string_keys() {
    let doc = Loader::bare()
        .load_str(
            r##"{"theme": {"colors": {"primary": {"DEFAULT": "#D4AF37", "500": "#123456"}}}}"##,
            SourceFormat::Json,
        )
        .unwrap();

    assert_eq!(doc.color("primary", None), Some(&hex("#D4AF37")));
    assert_eq!(doc.color("primary", Some(500)), Some(&hex("#123456")));
}

#[test]
fn test_shade_key_errors() {
    let err = load("theme:\n  colors:\n    primary:\n      dark: \"#000000\"\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.colors.primary.dark");

    let err = load(
        "theme:\n  colors:\n    primary:\n      500: \"#000000\"\n      \"500\": \"#111111\"\n",
    )
    .unwrap_err();
    assert_eq!(validation_path(err), "theme.colors.primary.500");

    let err = load("theme:\n  colors:\n    primary: {}\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.colors.primary");
}

#[test]
fn test_unconventional_shade_is_accepted() {
    let doc = load("theme:\n  extend:\n    colors:\n      primary:\n        950: \"#000000\"\n")
        .unwrap();
    assert_eq!(doc.color("primary", Some(950)), Some(&hex("#000000")));
}

// ============================================================================
// Keyframes and animations
// ============================================================================

#[test]
fn test_keyframe_aliases_and_scalar_values() {
    let doc = Loader::bare()
        .load_str(
            r#"
theme:
  keyframes:
    fade:
      from: { opacity: 0 }
      "50%": { opacity: 0.5 }
      to: { opacity: 1 }
"#,
            SourceFormat::Yaml,
        )
        .unwrap();

    let fade = &doc.keyframes["fade"];
    let offsets: Vec<&str> = fade.keys().map(KeyframeOffset::as_str).collect();
    assert_eq!(offsets, vec!["0%", "50%", "100%"]);
    assert_eq!(fade[&KeyframeOffset::parse("50%").unwrap()]["opacity"], "0.5");
    assert_eq!(fade[&KeyframeOffset::parse("0%").unwrap()]["opacity"], "0");
}

#[test]
fn test_keyframe_errors() {
    let err = load("theme:\n  extend:\n    keyframes:\n      grow:\n        \"150%\": { width: \"1px\" }\n")
        .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.keyframes.grow.150%");

    let err = load("theme:\n  extend:\n    keyframes:\n      grow:\n        from: { a: \"1\" }\n        \"0%\": { a: \"2\" }\n")
        .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.keyframes.grow.0%");

    let err = load("theme:\n  extend:\n    keyframes:\n      grow: {}\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.keyframes.grow");

    let err = load("theme:\n  extend:\n    keyframes:\n      none:\n        \"0%\": { a: \"1\" }\n")
        .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.keyframes.none");
}

#[test]
fn test_animation_errors() {
    let err = load("theme:\n  extend:\n    animation:\n      spin-fast: \"spin fast linear\"\n")
        .unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.spin-fast");

    let err = load("theme:\n  extend:\n    animation:\n      spin-fast: 3\n").unwrap_err();
    assert_eq!(validation_path(err), "theme.extend.animation.spin-fast");
}

// ============================================================================
// Content and plugins
// ============================================================================

#[test]
fn test_content_is_union_with_defaults() {
    let doc = load("content:\n  - \"./src/**/*.js\"\n  - \"../templates/**/*.html\"\n").unwrap();
    assert_eq!(doc.content_globs.len(), 4);
    assert_eq!(doc.content_globs.last().unwrap(), "./src/**/*.js");
}

#[test]
fn test_content_errors() {
    let err = load("content:\n  - \"ok/**\"\n  - \"\"\n").unwrap_err();
    assert_eq!(validation_path(err), "content[1]");

    let err = load("content:\n  - \"bad/[\"\n").unwrap_err();
    assert!(validation_path(err).starts_with("content["));
}

#[test]
fn test_plugin_identifiers() {
    let doc = load(
        "plugins:\n  - \"require('@tailwindcss/forms')\"\n  - 'require(\"@tailwindcss/typography\")'\n  - \"daisyui\"\n",
    )
    .unwrap();
    assert_eq!(
        doc.plugins,
        vec!["@tailwindcss/forms", "@tailwindcss/typography", "daisyui"]
    );

    let err = load("plugins:\n  - daisyui\n  - \"require('')\"\n").unwrap_err();
    assert_eq!(validation_path(err), "plugins[1]");
}

// ============================================================================
// Parse errors
// ============================================================================

#[test]
fn test_parse_errors() {
    assert_parse_error("- a\n- b\n");
    assert_parse_error("just a string");
    assert_parse_error("theme: [1, 2]\n");
    assert_parse_error("theme:\n  colors: [\"#000000\"]\n");
    assert_parse_error("theme:\n  colors:\n    primary: [\"#000000\"]\n");
    assert_parse_error("theme:\n  keyframes:\n    fade: \"0%\"\n");
    assert_parse_error("content: \"../templates/**/*.html\"\n");
    assert_parse_error("theme: {colors: {primary: \"#000000\"\n");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let doc = load(
        r#"
presets: []
theme:
  spacing:
    "128": "32rem"
  extend:
    fontFamily:
      sans: ["Inter"]
"#,
    )
    .unwrap();
    assert_eq!(doc, ConfigDocument::builtin());
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_load_file_yaml_and_json() {
    use std::io::Write;
    use tempfile::Builder;

    let mut yaml = Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(yaml, "{}", VIOLET).unwrap();
    let doc = load_file(yaml.path()).unwrap();
    assert_eq!(doc.dark_mode_strategy(), DarkModeStrategy::ExplicitClass);

    let mut json = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        json,
        r##"{{"darkMode": "class", "theme": {{"extend": {{"colors": {{"primary": {{"500": "#123456"}}}}}}}}}}"##
    )
    .unwrap();
    let doc = load_file(json.path()).unwrap();
    assert_eq!(doc.color("primary", Some(500)), Some(&hex("#123456")));
    assert_eq!(doc.dark_mode_strategy(), DarkModeStrategy::ExplicitClass);
}

#[test]
fn test_load_file_invalid_json_is_parse_error() {
    use std::io::Write;
    use tempfile::Builder;

    let mut json = Builder::new().suffix(".json").tempfile().unwrap();
    write!(json, "{{\"theme\": ").unwrap();
    let err = load_file(json.path()).unwrap_err();
    assert!(matches!(err, StyleError::ParseError(_)));
}

#[test]
fn test_load_missing_file() {
    let err = load_file("/nonexistent/path/tailwind.config.yaml").unwrap_err();
    assert!(matches!(err, StyleError::UserError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}
