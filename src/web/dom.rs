//! web-sys implementations of the widget seams

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, Window};

use crate::config::PresetsSection;
use crate::cost::{Dialogs, RecipeId};
use crate::error::{Error, Result};
use crate::modal::{ClickTarget, DismissSignal, Overlay, OverlaySurface};
use crate::presets::{FormFields, ReadyState};

const BACKDROP_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
  background: rgba(0,0,0,0.5); z-index: 10000; \
  display: flex; align-items: center; justify-content: center;";
const PANEL_STYLE: &str = "background: white; padding: 20px; border-radius: 8px; \
  max-width: 600px; max-height: 80vh; overflow-y: auto; \
  box-shadow: 0 4px 20px rgba(0,0,0,0.15);";
const HEADER_STYLE: &str =
  "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;";
const TITLE_STYLE: &str = "margin: 0; color: #1f2937;";
const CLOSE_STYLE: &str =
  "background: none; border: none; font-size: 24px; cursor: pointer; color: #6b7280;";

pub(crate) fn window() -> Result<Window> {
  web_sys::window().ok_or_else(|| Error::Dom("no window".into()))
}

pub(crate) fn document() -> Result<Document> {
  window()?
    .document()
    .ok_or_else(|| Error::Dom("no document".into()))
}

pub(crate) fn js_err(value: JsValue) -> Error {
  Error::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn create(document: &Document, tag: &str, style: &str) -> Result<Element> {
  let el = document.create_element(tag).map_err(js_err)?;
  el.set_attribute("style", style).map_err(js_err)?;
  Ok(el)
}

fn dispatch(target: ClickTarget, dismiss: &DismissSignal) {
  if target.dismisses() {
    dismiss();
  }
}

// =============================================================================
// Overlay
// =============================================================================

/// Mounts overlays as the last child of `<body>`
pub struct DomOverlaySurface {
  document: Document,
}

impl DomOverlaySurface {
  pub fn new(document: Document) -> Self {
    Self { document }
  }
}

/// A mounted overlay and the listeners it owns
pub struct DomOverlay {
  root: Element,
  _on_backdrop: Closure<dyn FnMut(Event)>,
  _on_close: Closure<dyn FnMut(Event)>,
}

impl OverlaySurface for DomOverlaySurface {
  type Handle = DomOverlay;

  fn mount(&self, overlay: &Overlay<'_>, dismiss: DismissSignal) -> Result<DomOverlay> {
    // Overlays left behind by other scripts share the reserved id.
    if let Some(stale) = self.document.get_element_by_id(overlay.element_id) {
      stale.remove();
    }

    let doc = &self.document;
    let root = create(doc, "div", BACKDROP_STYLE)?;
    root.set_id(overlay.element_id);
    let panel = create(doc, "div", PANEL_STYLE)?;
    let header = create(doc, "div", HEADER_STYLE)?;
    let heading = create(doc, "h2", TITLE_STYLE)?;
    heading.set_text_content(Some(overlay.title));
    let close = create(doc, "button", CLOSE_STYLE)?;
    close.set_attribute("type", "button").map_err(js_err)?;
    close.set_attribute("aria-label", "close").map_err(js_err)?;
    close.set_text_content(Some("×"));
    let body = doc.create_element("div").map_err(js_err)?;
    body.set_inner_html(overlay.content_html);

    header.append_child(&heading).map_err(js_err)?;
    header.append_child(&close).map_err(js_err)?;
    panel.append_child(&header).map_err(js_err)?;
    panel.append_child(&body).map_err(js_err)?;
    root.append_child(&panel).map_err(js_err)?;

    let on_close = {
      let dismiss = dismiss.clone();
      Closure::wrap(Box::new(move |_: Event| {
        dispatch(ClickTarget::CloseControl, &dismiss);
      }) as Box<dyn FnMut(Event)>)
    };
    close
      .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
      .map_err(js_err)?;

    let backdrop = JsValue::from(root.clone());
    let on_backdrop = Closure::wrap(Box::new(move |ev: Event| {
      let target = if ev.target().map(JsValue::from).as_ref() == Some(&backdrop) {
        ClickTarget::Backdrop
      } else {
        ClickTarget::Panel
      };
      dispatch(target, &dismiss);
    }) as Box<dyn FnMut(Event)>);
    root
      .add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())
      .map_err(js_err)?;

    let body_el = doc.body().ok_or_else(|| Error::Dom("no body".into()))?;
    body_el.append_child(&root).map_err(js_err)?;

    Ok(DomOverlay {
      root,
      _on_backdrop: on_backdrop,
      _on_close: on_close,
    })
  }

  fn unmount(&self, handle: DomOverlay) {
    handle.root.remove();
    // The click listener that triggered this may still be running.
    wasm_bindgen_futures::spawn_local(async move {
      drop(handle);
    });
  }
}

// =============================================================================
// Dialogs
// =============================================================================

pub struct WebDialogs {
  window: Window,
}

impl WebDialogs {
  pub fn new(window: Window) -> Self {
    Self { window }
  }
}

impl Dialogs for WebDialogs {
  fn prompt(&self, message: &str, default: &str) -> Option<String> {
    self
      .window
      .prompt_with_message_and_default(message, default)
      .ok()
      .flatten()
  }

  fn alert(&self, message: &str) {
    let _ = self.window.alert_with_message(message);
  }
}

// =============================================================================
// Recipe form
// =============================================================================

/// Category selector and yield input located by id
pub struct DomFormFields {
  category: Element,
  yield_rate: HtmlInputElement,
}

impl DomFormFields {
  pub fn resolve(document: &Document, config: &PresetsSection) -> Result<Self> {
    let category = document
      .get_element_by_id(&config.category_field_id)
      .ok_or_else(|| Error::MissingAnchor(config.category_field_id.clone()))?;
    let yield_rate = document
      .get_element_by_id(&config.yield_field_id)
      .ok_or_else(|| Error::MissingAnchor(config.yield_field_id.clone()))?
      .dyn_into::<HtmlInputElement>()
      .map_err(|_| Error::Dom(format!("#{} is not an input", config.yield_field_id)))?;
    Ok(Self {
      category,
      yield_rate,
    })
  }

  pub fn category_element(&self) -> &Element {
    &self.category
  }
}

impl FormFields for DomFormFields {
  fn category(&self) -> String {
    if let Some(select) = self.category.dyn_ref::<HtmlSelectElement>() {
      select.value()
    } else if let Some(input) = self.category.dyn_ref::<HtmlInputElement>() {
      input.value()
    } else {
      String::new()
    }
  }

  fn set_yield_rate(&self, value: &str) {
    self.yield_rate.set_value(value);
  }
}

/// Text of the embedded preset element, `None` when the element is absent
pub fn embedded_text(document: &Document, id: &str) -> Option<Option<String>> {
  document.get_element_by_id(id).map(|el| el.text_content())
}

// =============================================================================
// Page lifecycle
// =============================================================================

/// Run `f` once the document has finished parsing
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<()> {
  if ReadyState::from_dom(&document.ready_state()).is_ready() {
    f();
    return Ok(());
  }
  let callback = Closure::once_into_js(f);
  document
    .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    .map_err(js_err)
}

/// Delegate clicks on elements carrying `attribute` to `on_trigger`
pub fn bind_cost_triggers(
  document: &Document,
  attribute: &str,
  on_trigger: impl Fn(RecipeId) + 'static,
) -> Result<()> {
  let selector = format!("[{}]", attribute);
  let attribute = attribute.to_string();
  let on_click = Closure::wrap(Box::new(move |ev: Event| {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
      return;
    };
    let Ok(Some(trigger)) = target.closest(&selector) else {
      return;
    };
    let Some(id) = trigger.get_attribute(&attribute).filter(|id| !id.trim().is_empty()) else {
      return;
    };
    ev.prevent_default();
    on_trigger(RecipeId::from(id));
  }) as Box<dyn FnMut(Event)>);
  document
    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    .map_err(js_err)?;
  // Lives as long as the page.
  on_click.forget();
  Ok(())
}
