use std::collections::HashMap;

use serde::Deserialize;

use super::localized::Localized;
use crate::i18n::Lang;

/// Textos fijos de la interfaz (`labels.json`), indexados por clave.
///
/// Cada elemento del documento etiquetado con una clave recibe el texto
/// resuelto para el idioma actual.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Labels(HashMap<String, Localized>);

impl Labels {
  pub fn get(&self, key: &str) -> Option<&Localized> {
    self.0.get(key)
  }

  /// Texto de la etiqueta `key`, o `None` si la clave no existe.
  pub fn text(&self, key: &str, lang: Lang) -> Option<&str> {
    self.get(key).map(|value| value.resolve(lang))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(String, Localized)> for Labels {
  fn from_iter<I: IntoIterator<Item = (String, Localized)>>(iter: I) -> Self {
    Labels(iter.into_iter().collect())
  }
}
