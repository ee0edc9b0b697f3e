use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::format_plain;

/// Category key → default yield rate, fixed for the page's lifetime
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetMap {
  entries: BTreeMap<String, f64>,
}

impl PresetMap {
  /// Parse the embedded preset document. Missing or blank text is an empty
  /// mapping; anything that is not a JSON object is an error.
  pub fn parse(text: Option<&str>) -> Result<Self> {
    let text = match text.map(str::trim) {
      Some(t) if !t.is_empty() => t,
      _ => return Ok(Self::default()),
    };

    let raw: BTreeMap<String, Value> =
      serde_json::from_str(text).map_err(|e| Error::Presets(e.to_string()))?;
    Ok(Self::from_values(raw))
  }

  /// Like [`parse`](Self::parse), but a malformed document is logged and
  /// treated as empty so the binder still wires up.
  pub fn parse_or_empty(text: Option<&str>) -> Self {
    match Self::parse(text) {
      Ok(map) => map,
      Err(e) => {
        tracing::warn!(error = %e, "Yield presets unreadable; auto-fill disabled");
        Self::default()
      }
    }
  }

  /// Build from decoded JSON values, skipping entries that are not numeric
  pub fn from_values(raw: BTreeMap<String, Value>) -> Self {
    let mut entries = BTreeMap::new();
    for (key, value) in raw {
      let rate = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
      };
      match rate {
        Some(rate) => {
          entries.insert(key, rate);
        }
        None => tracing::warn!(category = %key, %value, "Skipping non-numeric yield preset"),
      }
    }
    Self { entries }
  }

  pub fn get(&self, category: &str) -> Option<f64> {
    self.entries.get(category).copied()
  }

  /// Preset rendered the way it is written into the yield input
  pub fn input_value(&self, category: &str) -> Option<String> {
    self.get(category).map(format_plain)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PresetMap {
  fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
    Self {
      entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    }
  }
}
