use super::{Band, Discography, Events, Labels, Links};

/// Modelo completo del sitio: los cinco documentos ya fusionados.
///
/// Se carga una sola vez al arrancar la página y no cambia después;
/// solo el idioma activo es mutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteModel {
  pub band: Band,
  pub events: Events,
  pub discography: Discography,
  pub links: Links,
  pub labels: Labels,
}
