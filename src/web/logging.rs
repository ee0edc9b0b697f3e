//! tracing output routed to the browser console

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config::LoggingSection;

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &LoggingSection) {
  let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter),
    )
    .try_init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
  type Writer = ConsoleWriter;

  fn make_writer(&'a self) -> Self::Writer {
    ConsoleWriter::new(Level::INFO)
  }

  fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
    ConsoleWriter::new(*meta.level())
  }
}

/// Buffers one formatted event and emits it on drop
struct ConsoleWriter {
  level: Level,
  buf: Vec<u8>,
}

impl ConsoleWriter {
  fn new(level: Level) -> Self {
    Self {
      level,
      buf: Vec::with_capacity(128),
    }
  }
}

impl io::Write for ConsoleWriter {
  fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
    self.buf.extend_from_slice(bytes);
    Ok(bytes.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl Drop for ConsoleWriter {
  fn drop(&mut self) {
    if self.buf.is_empty() {
      return;
    }
    let line = String::from_utf8_lossy(&self.buf);
    let msg = JsValue::from_str(line.trim_end());
    if self.level == Level::ERROR {
      console::error_1(&msg);
    } else if self.level == Level::WARN {
      console::warn_1(&msg);
    } else if self.level == Level::INFO {
      console::log_1(&msg);
    } else {
      console::debug_1(&msg);
    }
  }
}
