//! Yield-rate presets for the recipe form

mod binder;
mod map;

pub use binder::{FormFields, ReadyState, YieldPresetBinder};
pub use map::PresetMap;
