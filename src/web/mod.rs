//! Browser entry points
//!
//! The module start hook reads the page config, installs logging, binds the
//! cost triggers and schedules the yield preset binder for DOM readiness.
//! `showCostInfo`, `showModal` and `closeModal` are exported for inline
//! handlers rendered by the admin templates.

mod dom;
mod http;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::config::{PresetsSection, WidgetConfig};
use crate::cost::{CostPopup, RecipeId};
use crate::error::{Error, Result};
use crate::modal::ModalHost;
use crate::presets::{PresetMap, YieldPresetBinder};

pub use dom::{
  bind_cost_triggers, embedded_text, when_ready, DomFormFields, DomOverlay, DomOverlaySurface, WebDialogs,
};
pub use http::{fetch_presets, HttpCostClient};

/// Element holding an optional JSON [`WidgetConfig`]
pub const CONFIG_ELEMENT_ID: &str = "bakecalc-admin-config";

type WebCostPopup = CostPopup<WebDialogs, HttpCostClient, DomOverlaySurface>;

/// Widgets wired onto the current page
pub struct AdminWidgets {
  config: WidgetConfig,
  popup: WebCostPopup,
}

impl AdminWidgets {
  pub fn config(&self) -> &WidgetConfig {
    &self.config
  }

  pub fn popup(&self) -> &WebCostPopup {
    &self.popup
  }
}

thread_local! {
  static WIDGETS: RefCell<Option<Rc<AdminWidgets>>> = const { RefCell::new(None) };
}

fn current() -> Option<Rc<AdminWidgets>> {
  let widgets = WIDGETS.with(|w| w.borrow().clone());
  if widgets.is_none() {
    tracing::warn!("Admin widgets not installed");
  }
  widgets
}

#[wasm_bindgen(start)]
pub fn start() {
  console_error_panic_hook::set_once();

  let (config, config_error) = load_config();
  logging::init(&config.logging);
  if let Some(e) = config_error {
    tracing::warn!(error = %e, "Using default widget config");
  }

  match install(config) {
    Ok(()) => tracing::info!("Admin widgets ready"),
    Err(e) => tracing::warn!(error = %e, "Admin widgets unavailable"),
  }
}

fn load_config() -> (WidgetConfig, Option<Error>) {
  let text = dom::document()
    .ok()
    .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
    .and_then(|el| el.text_content());
  match text {
    Some(text) => match WidgetConfig::from_json(&text) {
      Ok(config) => (config, None),
      Err(e) => (WidgetConfig::default(), Some(e)),
    },
    None => (WidgetConfig::default(), None),
  }
}

fn install(config: WidgetConfig) -> Result<()> {
  let window = dom::window()?;
  let document = dom::document()?;

  let modal = ModalHost::new(
    DomOverlaySurface::new(document.clone()),
    config.modal.element_id.clone(),
  );
  let popup = CostPopup::new(
    WebDialogs::new(window),
    HttpCostClient::new(config.cost.endpoint.clone()),
    modal,
    config.cost.clone(),
  );
  let presets = config.presets.clone();
  let trigger_attribute = config.triggers.attribute.clone();
  let widgets = Rc::new(AdminWidgets { config, popup });
  WIDGETS.with(|w| *w.borrow_mut() = Some(widgets.clone()));

  bind_cost_triggers(&document, &trigger_attribute, move |recipe_id| {
    spawn_cost_popup(widgets.clone(), recipe_id);
  })?;

  let ready_doc = document.clone();
  when_ready(&document, move || bind_yield_presets(ready_doc, presets))
}

fn spawn_cost_popup(widgets: Rc<AdminWidgets>, recipe_id: RecipeId) {
  wasm_bindgen_futures::spawn_local(async move {
    let outcome = widgets.popup.show_cost_info(&recipe_id).await;
    tracing::debug!(%recipe_id, ?outcome, "Cost popup finished");
  });
}

fn recipe_id_from_js(value: &JsValue) -> Option<RecipeId> {
  if let Some(n) = value.as_f64() {
    if n.fract() == 0.0 && n.is_finite() {
      return Some(RecipeId::Int(n as i64));
    }
    return None;
  }
  value
    .as_string()
    .filter(|s| !s.trim().is_empty())
    .map(RecipeId::from)
}

/// Prompt for a margin and show the cost breakdown of `recipe_id`
#[wasm_bindgen(js_name = showCostInfo)]
pub fn show_cost_info(recipe_id: JsValue) {
  let Some(widgets) = current() else {
    return;
  };
  match recipe_id_from_js(&recipe_id) {
    Some(id) => spawn_cost_popup(widgets, id),
    None => tracing::warn!(?recipe_id, "Ignoring invalid recipe id"),
  }
}

/// Open the shared modal with arbitrary HTML content
#[wasm_bindgen(js_name = showModal)]
pub fn show_modal(title: &str, content_html: &str) -> std::result::Result<(), JsValue> {
  let Some(widgets) = current() else {
    return Err(JsValue::from_str("admin widgets not installed"));
  };
  widgets
    .popup
    .modal()
    .show_modal(title, content_html)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Close the shared modal; false when none was open
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() -> bool {
  current().map(|w| w.popup.modal().dismiss()).unwrap_or(false)
}

// =============================================================================
// Yield presets
// =============================================================================

fn bind_yield_presets(document: Document, config: PresetsSection) {
  let fields = match DomFormFields::resolve(&document, &config) {
    Ok(fields) => fields,
    Err(e) => {
      tracing::debug!(error = %e, "Yield preset binder disabled");
      return;
    }
  };

  match (embedded_text(&document, &config.json_element_id), config.fallback_endpoint) {
    (None, Some(url)) => wasm_bindgen_futures::spawn_local(async move {
      let presets = fetch_presets(&url).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, %url, "Failed to fetch yield presets");
        PresetMap::default()
      });
      attach_binder(fields, presets);
    }),
    (text, _) => attach_binder(fields, PresetMap::parse_or_empty(text.flatten().as_deref())),
  }
}

fn attach_binder(fields: DomFormFields, presets: PresetMap) {
  tracing::info!(count = presets.len(), "Yield presets loaded");
  let category = fields.category_element().clone();
  let binder = YieldPresetBinder::new(presets, fields);
  binder.apply_initial();

  let on_change = Closure::wrap(Box::new(move |_: Event| {
    binder.on_category_change();
  }) as Box<dyn FnMut(Event)>);
  if let Err(e) = category.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
    tracing::warn!(error = %dom::js_err(e), "Failed to bind category listener");
  }
  // Lives as long as the page.
  on_change.forget();
}
