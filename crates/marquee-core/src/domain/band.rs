use serde::Deserialize;

use super::localized::Localized;

/// La banda: identidad base que aparece en todas las páginas.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Band {
  /// Nombre canónico, invariante respecto al idioma.
  pub name: String,
  /// Lema corto mostrado en la portada.
  pub tagline: Localized,
  /// Biografía completa (página "about").
  pub bio: Localized,
  /// Fotos en el orden en que deben mostrarse.
  pub photos: Vec<Photo>,
}

/// Una foto de la galería.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Photo {
  /// URL de la imagen.
  pub src: String,
  pub alt: Localized,
  pub caption: Localized,
}
