//! Widget configuration
//!
//! Every field has a default matching the recipe admin page, so an empty
//! document (`{}`) is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
  #[serde(default)]
  pub cost: CostSection,
  #[serde(default)]
  pub modal: ModalSection,
  #[serde(default)]
  pub presets: PresetsSection,
  #[serde(default)]
  pub triggers: TriggersSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

impl WidgetConfig {
  /// Parse a JSON config document
  pub fn from_json(text: &str) -> Result<Self> {
    serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
  }
}

/// Cost popup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSection {
  /// Endpoint path; `{id}` is replaced by the recipe identifier
  #[serde(default = "default_cost_endpoint")]
  pub endpoint: String,

  /// Value pre-filled in the margin prompt
  #[serde(default = "default_margin")]
  pub default_margin: String,

  #[serde(default = "default_prompt_message")]
  pub prompt_message: String,

  #[serde(default = "default_modal_title")]
  pub modal_title: String,

  /// Prefix of the alert shown when loading fails
  #[serde(default = "default_failure_message")]
  pub failure_message: String,
}

fn default_cost_endpoint() -> String {
  "/api/recipes/{id}/cost-simple".into()
}
fn default_margin() -> String {
  "150".into()
}
fn default_prompt_message() -> String {
  "마진율을 입력하세요 (예: 150 = 50% 마진)".into()
}
fn default_modal_title() -> String {
  "원가 정보".into()
}
fn default_failure_message() -> String {
  "원가 정보를 불러오는데 실패했습니다".into()
}

impl Default for CostSection {
  fn default() -> Self {
    Self {
      endpoint: default_cost_endpoint(),
      default_margin: default_margin(),
      prompt_message: default_prompt_message(),
      modal_title: default_modal_title(),
      failure_message: default_failure_message(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalSection {
  /// Reserved identifier of the overlay element
  #[serde(default = "default_modal_id")]
  pub element_id: String,
}

fn default_modal_id() -> String {
  "cost-modal".into()
}

impl Default for ModalSection {
  fn default() -> Self {
    Self {
      element_id: default_modal_id(),
    }
  }
}

/// Anchors used by the yield preset binder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetsSection {
  #[serde(default = "default_presets_json_id")]
  pub json_element_id: String,
  #[serde(default = "default_category_id")]
  pub category_field_id: String,
  #[serde(default = "default_yield_id")]
  pub yield_field_id: String,

  /// Fetched when the embedded preset element is absent
  #[serde(default)]
  pub fallback_endpoint: Option<String>,
}

fn default_presets_json_id() -> String {
  "yield-presets-json".into()
}
fn default_category_id() -> String {
  "id_category".into()
}
fn default_yield_id() -> String {
  "id_yield_rate".into()
}

impl Default for PresetsSection {
  fn default() -> Self {
    Self {
      json_element_id: default_presets_json_id(),
      category_field_id: default_category_id(),
      yield_field_id: default_yield_id(),
      fallback_endpoint: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggersSection {
  /// Attribute holding the recipe identifier on cost buttons
  #[serde(default = "default_trigger_attribute")]
  pub attribute: String,
}

fn default_trigger_attribute() -> String {
  "data-cost-recipe-id".into()
}

impl Default for TriggersSection {
  fn default() -> Self {
    Self {
      attribute: default_trigger_attribute(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_level() -> String {
  "info".into()
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}
