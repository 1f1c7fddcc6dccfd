// crates/marquee-core/src/errors.rs
use thiserror::Error;

use crate::services::loader::LoadError;

/// Error genérico del núcleo de Marquee.
///
/// Las capas superiores (CLI, adaptadores) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error(transparent)]
  Load(#[from] LoadError),

  #[error("unsupported language: {0}")]
  UnsupportedLanguage(String),

  #[error("preference error: {0}")]
  Preference(String),

  #[error("site data not loaded")]
  NotReady,
}
