//! Margin prompt input

/// A margin percentage accepted from the prompt
#[derive(Debug, Clone, PartialEq)]
pub struct MarginInput {
  raw: String,
  value: f64,
}

impl MarginInput {
  /// Accept a prompt result.
  ///
  /// Returns `None` when the prompt was cancelled, left blank, or does not
  /// hold a finite number.
  pub fn parse(answer: Option<&str>) -> Option<Self> {
    let raw = answer?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return None;
    }
    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Self {
      raw: raw.to_string(),
      value,
    })
  }

  /// The string as entered; this is what the endpoint receives
  pub fn raw(&self) -> &str {
    &self.raw
  }

  pub fn value(&self) -> f64 {
    self.value
  }
}
