//! HTML fragment for the cost modal

use std::fmt::Write;

use super::model::{CostLineItem, CostResponse};
use crate::format::{escape_text, format_amount, format_plain};

/// Render the cost summary shown inside the modal.
///
/// The per-ingredient disclosure is emitted only when the response has line
/// items.
pub fn render_cost_html(data: &CostResponse) -> String {
  let mut html = String::with_capacity(2048);
  let heading = if data.recipe_id.is_some() { "레시피 " } else { "" };

  html.push_str(r#"<div class="cost-info" style="font-family: system-ui; line-height: 1.6; max-width: 500px;">"#);
  let _ = write!(
    html,
    r#"<h3 style="color: #1f2937; border-bottom: 2px solid #3b82f6; padding-bottom: 8px;">💰 {}원가 분석</h3>"#,
    heading
  );

  html.push_str(r#"<div class="cost-summary" style="background: #f8fafc; padding: 12px; border-radius: 6px; margin: 12px 0;">"#);
  html.push_str(r#"<div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px;">"#);
  summary_cell(&mut html, "원재료비", data.total_cost);
  summary_cell(&mut html, "손실률 적용", data.adjusted_total_cost);
  summary_cell(&mut html, "조각당 원가", data.cost_per_piece);
  summary_cell(&mut html, "권장 조각가", data.suggested_price_per_piece);
  if data.suggested_total_price.is_some() {
    summary_cell(&mut html, "권장 총가격", data.suggested_total_price);
  }
  html.push_str("</div></div>");

  let _ = write!(
    html,
    r#"<div class="cost-notes" style="font-size: 12px; color: #6b7280;"><p>• 수율: {}% ({}조각 기준)</p><p>• 마진율: {}% ({}% 이익)</p></div>"#,
    format_plain(data.yield_rate()),
    format_plain(data.servings()),
    format_plain(data.margin_percent()),
    format_plain(data.profit_percent()),
  );

  if !data.items.is_empty() {
    html.push_str(r#"<details class="cost-details" style="margin-top: 12px;">"#);
    html.push_str(r#"<summary style="cursor: pointer; font-weight: 500; color: #374151;">재료별 원가 상세</summary>"#);
    html.push_str(r#"<div style="margin-top: 8px; max-height: 200px; overflow-y: auto;">"#);
    for item in &data.items {
      line_item(&mut html, item);
    }
    html.push_str("</div></details>");
  }

  html.push_str("</div>");
  html
}

fn summary_cell(html: &mut String, label: &str, value: Option<f64>) {
  let _ = write!(
    html,
    "<div><strong>{}:</strong> {}원</div>",
    label,
    format_amount(value.unwrap_or(0.0))
  );
}

fn line_item(html: &mut String, item: &CostLineItem) {
  let _ = write!(
    html,
    r#"<div class="cost-line-item" style="padding: 4px; border-bottom: 1px solid #e5e7eb; font-size: 12px;"><span style="font-weight: 500;">{}</span>: {}g × {}원/100g = {}원</div>"#,
    escape_text(&item.ingredient_name),
    format_plain(item.amount_g.unwrap_or(0.0)),
    format_plain(item.price_per_100g.unwrap_or(0.0)),
    format_amount(item.cost.unwrap_or(0.0)),
  );
}
