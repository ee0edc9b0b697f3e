//! Cost popup: prompt for a margin, fetch the breakdown, show it in a modal

use std::rc::Rc;

use async_trait::async_trait;

use super::margin::MarginInput;
use super::model::{CostResponse, RecipeId};
use super::render::render_cost_html;
use crate::config::CostSection;
use crate::error::Result;
use crate::modal::{ModalHost, OverlaySurface};

/// Blocking browser dialogs
pub trait Dialogs {
  /// Ask for a value; `None` when cancelled
  fn prompt(&self, message: &str, default: &str) -> Option<String>;
  fn alert(&self, message: &str);
}

/// Source of recipe cost breakdowns
#[async_trait(?Send)]
pub trait CostSource {
  async fn fetch_cost(&self, recipe_id: &RecipeId, margin: &MarginInput) -> Result<CostResponse>;
}

/// Result of one `show_cost_info` call
#[derive(Debug, Clone, PartialEq)]
pub enum CostOutcome {
  /// Prompt cancelled or not numeric; nothing was requested
  Cancelled,
  Shown,
  /// The user was alerted with this message
  Failed(String),
}

/// Build the request path for a recipe and margin
pub fn cost_url(endpoint: &str, recipe_id: &RecipeId, margin: &MarginInput) -> String {
  let id = recipe_id.to_string();
  format!(
    "{}?margin={}",
    endpoint.replace("{id}", &urlencoding::encode(&id)),
    urlencoding::encode(margin.raw())
  )
}

pub struct CostPopup<D, C, S: OverlaySurface> {
  dialogs: D,
  source: C,
  modal: Rc<ModalHost<S>>,
  config: CostSection,
}

impl<D, C, S> CostPopup<D, C, S>
where
  D: Dialogs,
  C: CostSource,
  S: OverlaySurface + 'static,
{
  pub fn new(dialogs: D, source: C, modal: Rc<ModalHost<S>>, config: CostSection) -> Self {
    Self {
      dialogs,
      source,
      modal,
      config,
    }
  }

  pub fn modal(&self) -> &Rc<ModalHost<S>> {
    &self.modal
  }

  /// Prompt for a margin and show the recipe's cost breakdown.
  ///
  /// Concurrent calls are not coordinated; whichever response arrives last
  /// owns the modal.
  pub async fn show_cost_info(&self, recipe_id: &RecipeId) -> CostOutcome {
    let answer = self
      .dialogs
      .prompt(&self.config.prompt_message, &self.config.default_margin);
    let Some(margin) = MarginInput::parse(answer.as_deref()) else {
      tracing::debug!(%recipe_id, "Margin prompt cancelled");
      return CostOutcome::Cancelled;
    };

    match self.load_and_show(recipe_id, &margin).await {
      Ok(()) => CostOutcome::Shown,
      Err(e) => {
        tracing::warn!(%recipe_id, error = %e, "Failed to show cost info");
        let message = format!("{}: {}", self.config.failure_message, e);
        self.dialogs.alert(&message);
        CostOutcome::Failed(message)
      }
    }
  }

  async fn load_and_show(&self, recipe_id: &RecipeId, margin: &MarginInput) -> Result<()> {
    let data = self.source.fetch_cost(recipe_id, margin).await?;
    tracing::debug!(%recipe_id, items = data.items.len(), "Cost breakdown received");
    let content = render_cost_html(&data);
    self.modal.show_modal(&self.config.modal_title, &content)
  }
}
