//! Deterministic deep merge of configuration documents.
//!
//! Merging lays an overlay on top of a base:
//!
//! - mappings merge key by key, recursing into values present on both sides;
//! - leaves (hex colours, CSS values, shorthands) take the overlay's value;
//! - the dark-mode strategy takes the overlay's value when it declares one;
//! - `content_globs` and `plugins` are ordered unions (base order first).
//!
//! A single colour is the `DEFAULT` entry of a shade scale, so palette
//! entries merge as plain maps. Under these rules merge is associative,
//! the empty document is its identity, and re-applying an overlay is a
//! no-op.


use crate::animation::AnimationBinding;
use crate::document::ConfigDocument;
use crate::palette::{ColorValue, HexColor};
use std::collections::BTreeMap;
use tracing::debug;

/// In-place deep merge of an overlay into `self`.
pub trait Merge {
    fn merge_from(&mut self, overlay: &Self);
}

impl<K, V> Merge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Merge + Clone,
{
    fn merge_from(&mut self, overlay: &Self) {
        for (key, value) in overlay {
            match self.get_mut(key) {
                Some(existing) => existing.merge_from(value),
                None => {
                    self.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

macro_rules! replace_on_merge {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                fn merge_from(&mut self, overlay: &Self) {
                    self.clone_from(overlay);
                }
            }
        )*
    };
}

replace_on_merge!(String, HexColor, AnimationBinding);

impl Merge for ColorValue {
    fn merge_from(&mut self, overlay: &Self) {
        if let Some(hex) = &overlay.default {
            self.default = Some(hex.clone());
        }
        self.shades.merge_from(&overlay.shades);
    }
}

impl Merge for ConfigDocument {
    fn merge_from(&mut self, overlay: &Self) {
        union_into(&mut self.content_globs, &overlay.content_globs);
        if overlay.dark_mode.is_some() {
            self.dark_mode = overlay.dark_mode;
        }
        self.color_palette.merge_from(&overlay.color_palette);
        self.keyframes.merge_from(&overlay.keyframes);
        self.animation_bindings.merge_from(&overlay.animation_bindings);
        union_into(&mut self.plugins, &overlay.plugins);
    }
}

/// Append overlay entries not already present, keeping first-seen order.
fn union_into(base: &mut Vec<String>, overlay: &[String]) {
    for item in overlay {
        if !base.contains(item) {
            base.push(item.clone());
        }
    }
}

/// Merge `overlay` over `base`, returning a new document.
///
/// # Returns
///
/// A document where maps are deep-merged, leaves and a declared dark-mode
/// strategy come from `overlay`, and sequences are the ordered union of
/// both. Neither input is modified.
///
/// # Example
///
/// ```
/// use stylecfg::{Loader, SourceFormat, merge};
///
/// let load = |s: &str| Loader::bare().load_str(s, SourceFormat::Yaml).unwrap();
/// let base = load("theme:\n  colors:\n    primary:\n      500: '#D4AF37'\n      600: '#B8941E'\n");
/// let overlay = load("theme:\n  colors:\n    primary:\n      500: '#123456'\n");
///
/// let merged = merge(&base, &overlay);
/// assert_eq!(merged.color("primary", Some(500)).unwrap().as_str(), "#123456");
/// assert_eq!(merged.color("primary", Some(600)).unwrap().as_str(), "#B8941E");
/// ```
pub fn merge(base: &ConfigDocument, overlay: &ConfigDocument) -> ConfigDocument {
    let mut merged = base.clone();
    merged.merge_from(overlay);
    merged
}

/// Merge overlays left to right; later documents win on conflicts.
pub fn merge_all<'a, I>(base: &ConfigDocument, overlays: I) -> ConfigDocument
where
    I: IntoIterator<Item = &'a ConfigDocument>,
{
    let mut merged = base.clone();
    for (i, overlay) in overlays.into_iter().enumerate() {
        debug!(
            layer = i,
            colors = overlay.color_palette.len(),
            keyframes = overlay.keyframes.len(),
            animations = overlay.animation_bindings.len(),
            "merging overlay"
        );
        merged.merge_from(overlay);
    }
    merged
}
