//! Built-in framework defaults.

use super::model::ConfigDocument;
use crate::loader::{Loader, SourceFormat};
use std::sync::LazyLock;

const BUILTIN_SOURCE: &str = include_str!("builtin.yaml");

static BUILTIN: LazyLock<ConfigDocument> = LazyLock::new(|| {
    Loader::bare()
        .load_str(BUILTIN_SOURCE, SourceFormat::Yaml)
        .expect("Invalid built-in defaults")
});

impl ConfigDocument {
    /// The defaults a theme source replaces (`theme.*`) or extends
    /// (`theme.extend.*`).
    pub fn builtin() -> ConfigDocument {
        BUILTIN.clone()
    }
}
