use super::map::PresetMap;

/// The category selector and yield-rate input of the recipe form
pub trait FormFields {
  /// Current value of the category selector
  fn category(&self) -> String;
  fn set_yield_rate(&self, value: &str);
}

/// `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
  Loading,
  Interactive,
  Complete,
}

impl ReadyState {
  pub fn from_dom(state: &str) -> Self {
    match state {
      "loading" => Self::Loading,
      "interactive" => Self::Interactive,
      _ => Self::Complete,
    }
  }

  /// Whether setup can run now instead of waiting for DOMContentLoaded
  pub fn is_ready(self) -> bool {
    self != Self::Loading
  }
}

/// Fills the yield-rate input from the category presets
pub struct YieldPresetBinder<F: FormFields> {
  presets: PresetMap,
  fields: F,
}

impl<F: FormFields> YieldPresetBinder<F> {
  pub fn new(presets: PresetMap, fields: F) -> Self {
    Self { presets, fields }
  }

  /// Page-load fill. Uses the selector value as-is. Returns the value
  /// written, if any.
  pub fn apply_initial(&self) -> Option<String> {
    let category = self.fields.category();
    if category.is_empty() {
      return None;
    }
    self.fill(&category)
  }

  /// Change handler. Unknown categories leave the input untouched so manual
  /// edits survive.
  pub fn on_category_change(&self) -> Option<String> {
    let category = self.fields.category();
    let key = category.trim();
    let applied = self.fill(key);
    tracing::debug!(category = key, preset = ?applied, "Category changed");
    applied
  }

  pub fn presets(&self) -> &PresetMap {
    &self.presets
  }

  pub fn fields(&self) -> &F {
    &self.fields
  }

  fn fill(&self, key: &str) -> Option<String> {
    let value = self.presets.input_value(key)?;
    self.fields.set_yield_rate(&value);
    Some(value)
  }
}
