use thiserror::Error;

/// Errors raised by the admin widgets
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("network error: {0}")]
  Network(String),

  #[error("HTTP error: {0}")]
  Status(u16),

  #[error("invalid response: {0}")]
  Decode(String),

  #[error("element #{0} not found")]
  MissingAnchor(String),

  #[error("DOM error: {0}")]
  Dom(String),

  #[error("invalid config: {0}")]
  Config(String),

  #[error("invalid presets: {0}")]
  Presets(String),
}

pub type Result<T> = std::result::Result<T, Error>;
