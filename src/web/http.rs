//! HTTP access to the recipe backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::cost::{cost_url, CostResponse, CostSource, MarginInput, RecipeId};
use crate::error::{Error, Result};
use crate::presets::PresetMap;

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
  let resp = Request::get(url)
    .send()
    .await
    .map_err(|e| Error::Network(e.to_string()))?;
  if !resp.ok() {
    return Err(Error::Status(resp.status()));
  }
  resp.json().await.map_err(|e| Error::Decode(e.to_string()))
}

/// Fetches cost breakdowns from the session-authenticated admin API
pub struct HttpCostClient {
  endpoint: String,
}

impl HttpCostClient {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      endpoint: endpoint.into(),
    }
  }
}

#[async_trait(?Send)]
impl CostSource for HttpCostClient {
  async fn fetch_cost(&self, recipe_id: &RecipeId, margin: &MarginInput) -> Result<CostResponse> {
    let url = cost_url(&self.endpoint, recipe_id, margin);
    tracing::debug!(%url, "Fetching recipe cost");
    fetch_json(&url).await
  }
}

/// Load the preset mapping from the yield-presets endpoint
pub async fn fetch_presets(url: &str) -> Result<PresetMap> {
  let raw: BTreeMap<String, serde_json::Value> = fetch_json(url).await?;
  Ok(PresetMap::from_values(raw))
}
