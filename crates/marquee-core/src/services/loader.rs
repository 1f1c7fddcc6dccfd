use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Band, Discography, Events, Labels, Links, SiteModel};
use crate::ports::{DataSource, FetchError, Resource};

#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to load {resource}: {source}")]
  Fetch {
    resource: Resource,
    #[source]
    source: FetchError,
  },

  #[error("failed to parse {resource}: {source}")]
  Parse {
    resource: Resource,
    #[source]
    source: serde_json::Error,
  },
}

impl LoadError {
  /// Documento que provocó el fallo.
  pub fn resource(&self) -> Resource {
    match self {
      LoadError::Fetch { resource, .. } | LoadError::Parse { resource, .. } => *resource,
    }
  }
}

/// Carga y fusiona los cinco documentos del sitio.
///
/// Las lecturas se lanzan a la vez; el primer fallo (HTTP, IO o JSON
/// inválido) cancela el resto y se devuelve nombrando el recurso.
pub async fn load_all<S>(source: &S) -> Result<SiteModel, LoadError>
where
  S: DataSource + ?Sized,
{
  let (band, events, discography, links, labels) = futures::try_join!(
    load_document::<Band, _>(source, Resource::Band),
    load_document::<Events, _>(source, Resource::Events),
    load_document::<Discography, _>(source, Resource::Discography),
    load_document::<Links, _>(source, Resource::Links),
    load_document::<Labels, _>(source, Resource::Labels),
  )?;

  Ok(SiteModel { band, events, discography, links, labels })
}

async fn load_document<T, S>(source: &S, resource: Resource) -> Result<T, LoadError>
where
  T: DeserializeOwned,
  S: DataSource + ?Sized,
{
  debug!(%resource, "fetching site document");

  let body =
    source.fetch(resource).await.map_err(|err| LoadError::Fetch { resource, source: err })?;
  serde_json::from_slice(&body).map_err(|err| LoadError::Parse { resource, source: err })
}
