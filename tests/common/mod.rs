//! Test doubles for the widget seams

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use bakecalc_admin::cost::{CostResponse, CostSource, Dialogs, MarginInput, RecipeId};
use bakecalc_admin::modal::{ClickTarget, DismissSignal, Overlay, OverlaySurface};
use bakecalc_admin::presets::FormFields;
use bakecalc_admin::{Error, Result};

// =============================================================================
// Overlay surface
// =============================================================================

pub struct Mounted {
  pub key: u32,
  pub element_id: String,
  pub title: String,
  pub content: String,
  pub dismiss: DismissSignal,
}

#[derive(Default)]
struct SurfaceState {
  mounted: RefCell<Vec<Mounted>>,
  history: RefCell<Vec<DismissSignal>>,
  next_key: Cell<u32>,
  fail: Cell<bool>,
}

/// In-memory overlay surface; clones share state
#[derive(Clone, Default)]
pub struct FakeSurface {
  state: Rc<SurfaceState>,
}

impl FakeSurface {
  pub fn fail_mounts(&self, fail: bool) {
    self.state.fail.set(fail);
  }

  pub fn count_with_id(&self, id: &str) -> usize {
    self
      .state
      .mounted
      .borrow()
      .iter()
      .filter(|m| m.element_id == id)
      .count()
  }

  pub fn mounted_count(&self) -> usize {
    self.state.mounted.borrow().len()
  }

  pub fn top_title(&self) -> Option<String> {
    self.state.mounted.borrow().last().map(|m| m.title.clone())
  }

  pub fn top_content(&self) -> Option<String> {
    self.state.mounted.borrow().last().map(|m| m.content.clone())
  }

  /// Dismiss signal handed out by the n-th mount (0-based)
  pub fn dismiss_signal(&self, n: usize) -> DismissSignal {
    self.state.history.borrow()[n].clone()
  }

  /// Simulate a click on the topmost overlay
  pub fn click(&self, target: ClickTarget) {
    let dismiss = self.state.mounted.borrow().last().map(|m| m.dismiss.clone());
    if let Some(dismiss) = dismiss {
      if target.dismisses() {
        dismiss();
      }
    }
  }
}

impl OverlaySurface for FakeSurface {
  type Handle = u32;

  fn mount(&self, overlay: &Overlay<'_>, dismiss: DismissSignal) -> Result<u32> {
    if self.state.fail.get() {
      return Err(Error::Dom("mount refused".into()));
    }
    let key = self.state.next_key.get();
    self.state.next_key.set(key + 1);
    self.state.history.borrow_mut().push(dismiss.clone());
    self.state.mounted.borrow_mut().push(Mounted {
      key,
      element_id: overlay.element_id.to_string(),
      title: overlay.title.to_string(),
      content: overlay.content_html.to_string(),
      dismiss,
    });
    Ok(key)
  }

  fn unmount(&self, key: u32) {
    self.state.mounted.borrow_mut().retain(|m| m.key != key);
  }
}

// =============================================================================
// Dialogs
// =============================================================================

#[derive(Default)]
struct DialogState {
  answer: RefCell<Option<String>>,
  prompts: RefCell<Vec<(String, String)>>,
  alerts: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct FakeDialogs {
  state: Rc<DialogState>,
}

impl FakeDialogs {
  pub fn answering(answer: Option<&str>) -> Self {
    let dialogs = Self::default();
    dialogs.set_answer(answer);
    dialogs
  }

  pub fn set_answer(&self, answer: Option<&str>) {
    *self.state.answer.borrow_mut() = answer.map(str::to_string);
  }

  pub fn prompts(&self) -> Vec<(String, String)> {
    self.state.prompts.borrow().clone()
  }

  pub fn alerts(&self) -> Vec<String> {
    self.state.alerts.borrow().clone()
  }
}

impl Dialogs for FakeDialogs {
  fn prompt(&self, message: &str, default: &str) -> Option<String> {
    self
      .state
      .prompts
      .borrow_mut()
      .push((message.to_string(), default.to_string()));
    self.state.answer.borrow().clone()
  }

  fn alert(&self, message: &str) {
    self.state.alerts.borrow_mut().push(message.to_string());
  }
}

// =============================================================================
// Cost source
// =============================================================================

struct SourceState {
  response: RefCell<Result<CostResponse>>,
  calls: RefCell<Vec<(RecipeId, String)>>,
}

#[derive(Clone)]
pub struct FakeCostSource {
  state: Rc<SourceState>,
}

impl FakeCostSource {
  pub fn returning(response: Result<CostResponse>) -> Self {
    Self {
      state: Rc::new(SourceState {
        response: RefCell::new(response),
        calls: RefCell::new(Vec::new()),
      }),
    }
  }

  pub fn set_response(&self, response: Result<CostResponse>) {
    *self.state.response.borrow_mut() = response;
  }

  pub fn calls(&self) -> Vec<(RecipeId, String)> {
    self.state.calls.borrow().clone()
  }
}

#[async_trait(?Send)]
impl CostSource for FakeCostSource {
  async fn fetch_cost(&self, recipe_id: &RecipeId, margin: &MarginInput) -> Result<CostResponse> {
    self
      .state
      .calls
      .borrow_mut()
      .push((recipe_id.clone(), margin.raw().to_string()));
    self.state.response.borrow().clone()
  }
}

// =============================================================================
// Form fields
// =============================================================================

#[derive(Default)]
struct FieldState {
  category: RefCell<String>,
  yield_rate: RefCell<String>,
}

#[derive(Clone, Default)]
pub struct FakeFields {
  state: Rc<FieldState>,
}

impl FakeFields {
  pub fn new(category: &str, yield_rate: &str) -> Self {
    let fields = Self::default();
    fields.select(category);
    fields.type_yield(yield_rate);
    fields
  }

  pub fn select(&self, category: &str) {
    *self.state.category.borrow_mut() = category.to_string();
  }

  pub fn type_yield(&self, value: &str) {
    *self.state.yield_rate.borrow_mut() = value.to_string();
  }

  pub fn yield_rate(&self) -> String {
    self.state.yield_rate.borrow().clone()
  }
}

impl FormFields for FakeFields {
  fn category(&self) -> String {
    self.state.category.borrow().clone()
  }

  fn set_yield_rate(&self, value: &str) {
    self.type_yield(value);
  }
}
