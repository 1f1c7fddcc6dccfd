use serde::Deserialize;

/// Contenido de `links.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Links {
  pub streaming: StreamingLinks,
}

/// Enlaces a servicios de streaming. Un enlace ausente no se muestra.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamingLinks {
  pub spotify: Option<String>,
  pub apple_music: Option<String>,
}
