//! Cost breakdown returned by the recipe cost endpoint

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_YIELD_RATE: f64 = 100.0;
pub const DEFAULT_SERVINGS: f64 = 1.0;
pub const DEFAULT_MARGIN_PERCENT: f64 = 150.0;

/// Recipe identifier as it appears on the admin page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
  Int(i64),
  Text(String),
}

impl fmt::Display for RecipeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Int(id) => write!(f, "{}", id),
      Self::Text(id) => f.write_str(id),
    }
  }
}

impl From<i64> for RecipeId {
  fn from(id: i64) -> Self {
    Self::Int(id)
  }
}

impl From<&str> for RecipeId {
  fn from(id: &str) -> Self {
    match id.trim().parse::<i64>() {
      Ok(n) => Self::Int(n),
      Err(_) => Self::Text(id.to_string()),
    }
  }
}

impl From<String> for RecipeId {
  fn from(id: String) -> Self {
    Self::from(id.as_str())
  }
}

/// Cost summary for one recipe at a given margin.
///
/// Every numeric field tolerates `null` or absence; the accessor methods
/// apply the display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostResponse {
  #[serde(default)]
  pub recipe_id: Option<RecipeId>,
  /// Raw material cost
  #[serde(default)]
  pub total_cost: Option<f64>,
  /// Cost after the yield-loss factor
  #[serde(default)]
  pub adjusted_total_cost: Option<f64>,
  #[serde(default)]
  pub cost_per_piece: Option<f64>,
  #[serde(default)]
  pub suggested_price_per_piece: Option<f64>,
  #[serde(default)]
  pub suggested_total_price: Option<f64>,
  #[serde(default)]
  pub yield_rate: Option<f64>,
  #[serde(default)]
  pub servings: Option<f64>,
  #[serde(default)]
  pub margin_percent: Option<f64>,
  #[serde(default, rename = "items_cost", deserialize_with = "null_as_empty")]
  pub items: Vec<CostLineItem>,
}

/// Per-ingredient cost line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
  #[serde(default, rename = "ingredient")]
  pub ingredient_name: String,
  #[serde(default)]
  pub amount_g: Option<f64>,
  #[serde(default)]
  pub price_per_100g: Option<f64>,
  #[serde(default)]
  pub cost: Option<f64>,
}

impl CostResponse {
  pub fn yield_rate(&self) -> f64 {
    non_zero(self.yield_rate).unwrap_or(DEFAULT_YIELD_RATE)
  }

  pub fn servings(&self) -> f64 {
    non_zero(self.servings).unwrap_or(DEFAULT_SERVINGS)
  }

  pub fn margin_percent(&self) -> f64 {
    non_zero(self.margin_percent).unwrap_or(DEFAULT_MARGIN_PERCENT)
  }

  /// Profit share implied by the margin (150 → 50)
  pub fn profit_percent(&self) -> f64 {
    self.margin_percent() - 100.0
  }
}

fn non_zero(value: Option<f64>) -> Option<f64> {
  value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CostLineItem>, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(Option::<Vec<CostLineItem>>::deserialize(deserializer)?.unwrap_or_default())
}
