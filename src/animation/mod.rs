//! Keyframe sets and the animation shorthand bindings that reference them.

mod binding;
mod keyframes;


pub use binding::{
    AnimationBinding, AnimationRun, CssTime, IterationCount, TimingFunction, is_valid_identifier,
    is_valid_name,
};
pub use keyframes::{Keyframe, KeyframeOffset, KeyframeStep, has_end, has_start};
