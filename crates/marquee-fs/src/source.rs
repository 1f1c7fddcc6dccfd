use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use marquee_core::ports::{DataSource, FetchError, Resource};
use tracing::debug;

/// Lee los documentos del sitio desde un directorio local.
///
/// `root` es la raíz del sitio: los ficheros se buscan en `root/data/*.json`.
/// Cada `fetch` vuelve a leer del disco.
#[derive(Debug, Clone)]
pub struct DirDataSource {
  root: PathBuf,
}

impl DirDataSource {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn path_of(&self, resource: Resource) -> PathBuf {
    self.root.join(resource.path())
  }
}

#[async_trait]
impl DataSource for DirDataSource {
  async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
    let path = self.path_of(resource);
    debug!(path = %path.display(), "reading site document");

    tokio::fs::read(&path).await.map_err(|e| match e.kind() {
      ErrorKind::NotFound => FetchError::NotFound,
      _ => FetchError::Io(format!("{}: {e}", path.display())),
    })
  }
}
