//! Recipe cost popup

mod margin;
mod model;
mod popup;
mod render;

pub use margin::MarginInput;
pub use model::{
  CostLineItem, CostResponse, RecipeId, DEFAULT_MARGIN_PERCENT, DEFAULT_SERVINGS, DEFAULT_YIELD_RATE,
};
pub use popup::{cost_url, CostOutcome, CostPopup, CostSource, Dialogs};
pub use render::render_cost_html;
