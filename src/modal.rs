//! Single-instance modal overlay
//!
//! `ModalHost` owns at most one mounted overlay. Opening a modal unmounts the
//! previous one first, so concurrent openers resolve last-writer-wins. The
//! rendering target is abstracted behind [`OverlaySurface`]; the browser
//! implementation lives in `web::dom`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::Result;

/// Fired by a surface when the user asks to close the overlay
pub type DismissSignal = Rc<dyn Fn()>;

/// What a surface is asked to display
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
  pub element_id: &'a str,
  pub title: &'a str,
  pub content_html: &'a str,
}

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
  /// The translucent area outside the panel
  Backdrop,
  /// Anywhere inside the panel, including its content
  Panel,
  CloseControl,
}

impl ClickTarget {
  pub fn dismisses(self) -> bool {
    !matches!(self, Self::Panel)
  }
}

/// A place overlays can be mounted into
pub trait OverlaySurface {
  type Handle: 'static;

  /// Insert the overlay. The surface must invoke `dismiss` for every click
  /// whose [`ClickTarget`] dismisses.
  fn mount(&self, overlay: &Overlay<'_>, dismiss: DismissSignal) -> Result<Self::Handle>;

  /// Remove a previously mounted overlay. Must tolerate an overlay that is
  /// already detached.
  fn unmount(&self, handle: Self::Handle);
}

struct ActiveModal<H> {
  generation: u64,
  handle: H,
}

pub struct ModalHost<S: OverlaySurface> {
  surface: S,
  element_id: String,
  active: RefCell<Option<ActiveModal<S::Handle>>>,
  generation: Cell<u64>,
  listeners: RefCell<Vec<Rc<dyn Fn()>>>,
  this: Weak<Self>,
}

impl<S: OverlaySurface + 'static> ModalHost<S> {
  pub fn new(surface: S, element_id: impl Into<String>) -> Rc<Self> {
    let element_id = element_id.into();
    Rc::new_cyclic(|this| Self {
      surface,
      element_id,
      active: RefCell::new(None),
      generation: Cell::new(0),
      listeners: RefCell::new(Vec::new()),
      this: this.clone(),
    })
  }

  /// Show `content_html` under `title`, replacing any open modal
  pub fn show_modal(&self, title: &str, content_html: &str) -> Result<()> {
    let previous = self.active.borrow_mut().take();
    if let Some(previous) = previous {
      tracing::debug!(generation = previous.generation, "Replacing open modal");
      self.surface.unmount(previous.handle);
    }

    let generation = self.generation.get() + 1;
    self.generation.set(generation);

    let host = self.this.clone();
    let dismiss: DismissSignal = Rc::new(move || {
      if let Some(host) = host.upgrade() {
        host.dismiss_generation(generation);
      }
    });

    let overlay = Overlay {
      element_id: &self.element_id,
      title,
      content_html,
    };
    let handle = self.surface.mount(&overlay, dismiss)?;
    *self.active.borrow_mut() = Some(ActiveModal { generation, handle });
    tracing::debug!(generation, title, "Modal opened");
    Ok(())
  }

  /// Close the open modal. Returns false when nothing was open.
  pub fn dismiss(&self) -> bool {
    let active = self.active.borrow_mut().take();
    let Some(active) = active else {
      return false;
    };
    self.surface.unmount(active.handle);
    tracing::debug!(generation = active.generation, "Modal dismissed");

    let listeners = self.listeners.borrow().clone();
    for listener in listeners {
      listener();
    }
    true
  }

  /// Register a callback fired after every dismissal
  pub fn on_dismiss(&self, listener: impl Fn() + 'static) {
    self.listeners.borrow_mut().push(Rc::new(listener));
  }

  pub fn is_open(&self) -> bool {
    self.active.borrow().is_some()
  }

  pub fn element_id(&self) -> &str {
    &self.element_id
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  // Signals from a replaced overlay must not close its successor.
  fn dismiss_generation(&self, generation: u64) {
    let current = self.active.borrow().as_ref().map(|m| m.generation);
    if current == Some(generation) {
      self.dismiss();
    }
  }
}
