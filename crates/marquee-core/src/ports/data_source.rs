use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

/// Los cinco documentos de datos del sitio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
  Band,
  Events,
  Discography,
  Links,
  Labels,
}

impl Resource {
  /// Ruta relativa a la raíz del sitio.
  pub fn path(&self) -> &'static str {
    match self {
      Resource::Band => "data/band.json",
      Resource::Events => "data/events.json",
      Resource::Discography => "data/discography.json",
      Resource::Links => "data/links.json",
      Resource::Labels => "data/labels.json",
    }
  }
}

impl fmt::Display for Resource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.path())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
  #[error("http status {0}")]
  Status(u16),

  #[error("transport error: {0}")]
  Transport(String),

  #[error("io error: {0}")]
  Io(String),

  #[error("not found")]
  NotFound,
}

/// Port que abstrae de dónde salen los documentos JSON.
///
/// Implementaciones posibles:
/// - HTTP relativo a la URL base del sitio
/// - un directorio local con `data/*.json`
/// - memoria (tests, datos embebidos)
///
/// Cada lectura debe devolver el contenido actual, sin cachés intermedias.
#[async_trait]
pub trait DataSource: Send + Sync {
  async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError>;
}

/// Fuente en memoria. Un recurso se puede forzar a fallar con un código HTTP.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSource {
  documents: HashMap<Resource, Result<Vec<u8>, FetchError>>,
}

impl MemoryDataSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_document(mut self, resource: Resource, body: impl Into<Vec<u8>>) -> Self {
    self.documents.insert(resource, Ok(body.into()));
    self
  }

  pub fn with_failure(mut self, resource: Resource, error: FetchError) -> Self {
    self.documents.insert(resource, Err(error));
    self
  }
}

#[async_trait]
impl DataSource for MemoryDataSource {
  async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
    self.documents.get(&resource).cloned().unwrap_or(Err(FetchError::NotFound))
  }
}
