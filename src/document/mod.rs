//! The resolved style configuration document.
//!
//! This module defines the `ConfigDocument` that a loader produces and an
//! external build tool consumes: content globs, dark-mode strategy, colour
//! palette, keyframes, animation bindings, and plugins.

mod defaults;
mod model;
mod operations;
pub mod types;


pub use model::ConfigDocument;
pub use types::DarkModeStrategy;
