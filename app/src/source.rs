use async_trait::async_trait;
use marquee_config::SiteConfig;
use marquee_core::ports::{DataSource, FetchError, Resource};
use marquee_fs::DirDataSource;
use marquee_http::{HttpDataSource, HttpSourceError};

/// Fuente de datos elegida según la ubicación configurada.
pub enum SiteSource {
  Http(HttpDataSource),
  Dir(DirDataSource),
}

impl SiteSource {
  /// `http(s)://...` se descarga; cualquier otra cosa es un directorio local.
  pub fn from_config(config: &SiteConfig) -> Result<Self, HttpSourceError> {
    let location = config.source.trim();
    if config.source_is_remote() {
      Ok(SiteSource::Http(HttpDataSource::new(location)?))
    } else {
      Ok(SiteSource::Dir(DirDataSource::new(location)))
    }
  }

  pub fn describe(&self) -> String {
    match self {
      SiteSource::Http(source) => source.base().to_string(),
      SiteSource::Dir(source) => source.root().display().to_string(),
    }
  }
}

#[async_trait]
impl DataSource for SiteSource {
  async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
    match self {
      SiteSource::Http(source) => source.fetch(resource).await,
      SiteSource::Dir(source) => source.fetch(resource).await,
    }
  }
}
