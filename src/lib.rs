//! Browser-side helpers for the recipe admin: the cost popup, the shared
//! modal overlay and the yield-rate preset binder.
//!
//! The core modules are DOM-free; `web` (feature `csr`) binds them to the
//! page through web-sys.

pub mod config;
pub mod cost;
pub mod error;
pub mod format;
pub mod modal;
pub mod presets;

// Browser bindings (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod web;

pub use config::WidgetConfig;
pub use error::{Error, Result};
