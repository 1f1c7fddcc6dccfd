use async_trait::async_trait;
use marquee_core::ports::{DataSource, FetchError, Resource};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum HttpSourceError {
  #[error("invalid base url: {0}")]
  InvalidBaseUrl(#[from] url::ParseError),

  #[error("failed to create http client: {0}")]
  Client(#[from] reqwest::Error),
}

/// Descarga los documentos del sitio relativos a una URL base.
///
/// Las peticiones piden siempre contenido fresco (`Cache-Control: no-store`)
/// y no llevan timeout: una petición colgada deja la carga pendiente.
pub struct HttpDataSource {
  client: Client,
  base: Url,
}

impl HttpDataSource {
  pub fn new(base: &str) -> Result<Self, HttpSourceError> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    let client =
      Client::builder().user_agent(USER_AGENT).default_headers(headers).no_proxy().build()?;

    Ok(Self { client, base: normalize_base(base)? })
  }

  pub fn base(&self) -> &Url {
    &self.base
  }

  pub fn url_of(&self, resource: Resource) -> Result<Url, url::ParseError> {
    self.base.join(resource.path())
  }
}

/// Una base sin `/` final se trata como directorio: `https://x/site` sirve
/// `https://x/site/data/band.json`, no `https://x/data/band.json`.
fn normalize_base(base: &str) -> Result<Url, url::ParseError> {
  let mut url = Url::parse(base)?;
  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }
  Ok(url)
}

#[async_trait]
impl DataSource for HttpDataSource {
  async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
    let url = self.url_of(resource).map_err(|e| FetchError::Transport(e.to_string()))?;
    debug!(%url, "GET site document");

    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      warn!(%url, status = status.as_u16(), "site document request failed");
      return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(body.to_vec())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use std::sync::{Arc, Mutex};
  use tokio::io::{AsyncReadExt, AsyncWriteExt};
  use tokio::net::TcpListener;

  #[test]
  fn base_is_treated_as_directory() {
    let source = HttpDataSource::new("https://band.example/site").unwrap();
    let band = source.url_of(Resource::Band).unwrap();
    assert_eq!(band.as_str(), "https://band.example/site/data/band.json");

    let source = HttpDataSource::new("https://band.example/").unwrap();
    let labels = source.url_of(Resource::Labels).unwrap();
    assert_eq!(labels.as_str(), "https://band.example/data/labels.json");

    assert!(HttpDataSource::new("not a url").is_err());
  }

  /// Servidor HTTP mínimo: responde 200 con el cuerpo de las rutas conocidas
  /// y 404 al resto. Guarda las cabeceras de cada petición.
  async fn stub_server(
    routes: HashMap<&'static str, &'static str>,
  ) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_server = Arc::clone(&seen);

    tokio::spawn(async move {
      loop {
        let Ok((mut stream, _)) = listener.accept().await else { break };
        let routes = routes.clone();
        let seen = Arc::clone(&seen_in_server);

        tokio::spawn(async move {
          let mut buf = vec![0u8; 8192];
          let mut read = 0;
          loop {
            let n = stream.read(&mut buf[read..]).await.unwrap();
            read += n;
            if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
              break;
            }
          }
          let request = String::from_utf8_lossy(&buf[..read]).to_string();
          let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
          seen.lock().unwrap().push(request.to_ascii_lowercase());

          let response = match routes.get(path.as_str()) {
            Some(body) => format!(
              concat!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n",
                "content-length: {}\r\nconnection: close\r\n\r\n{}",
              ),
              body.len(),
              body
            ),
            None => {
              "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n".to_string()
            }
          };
          stream.write_all(response.as_bytes()).await.unwrap();
          stream.shutdown().await.ok();
        });
      }
    });

    (format!("http://{addr}/site"), seen)
  }

  #[tokio::test]
  async fn fetches_fresh_documents() {
    let routes = HashMap::from([("/site/data/band.json", r#"{"name":"Los Relampagos"}"#)]);
    let (base, seen) = stub_server(routes).await;
    let source = HttpDataSource::new(&base).unwrap();

    let body = source.fetch(Resource::Band).await.unwrap();
    assert_eq!(body, br#"{"name":"Los Relampagos"}"#.to_vec());

    let requests = seen.lock().unwrap();
    assert!(requests[0].starts_with("get /site/data/band.json"));
    assert!(requests[0].contains("cache-control: no-store"));
  }

  #[tokio::test]
  async fn non_success_status_is_an_error() {
    let (base, _) = stub_server(HashMap::new()).await;
    let source = HttpDataSource::new(&base).unwrap();

    assert_eq!(source.fetch(Resource::Links).await, Err(FetchError::Status(404)));
  }
}
