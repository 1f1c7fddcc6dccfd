use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::i18n::Lang;

/// Texto que puede variar según el idioma.
///
/// En los documentos JSON aparece de dos formas:
/// - una cadena simple, invariante respecto al idioma (`"Los Relámpagos"`),
/// - un mapa `código → texto` (`{ "en": "Tour", "es": "Gira" }`).
///
/// `en` actúa como respaldo universal cuando falta el idioma pedido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Localized {
  Plain(String),
  PerLanguage(HashMap<String, String>),
}

impl Localized {
  /// Resuelve el texto para `lang`.
  ///
  /// Nunca falla: si no hay entrada para `lang` ni para `en`, devuelve `""`.
  /// Una entrada vacía cuenta como ausente.
  pub fn resolve(&self, lang: Lang) -> &str {
    match self {
      Localized::Plain(text) => text,
      Localized::PerLanguage(entries) => entries
        .get(lang.code())
        .filter(|s| !s.is_empty())
        .or_else(|| entries.get(Lang::FALLBACK.code()).filter(|s| !s.is_empty()))
        .map(String::as_str)
        .unwrap_or(""),
    }
  }

  pub fn is_empty(&self) -> bool {
    match self {
      Localized::Plain(text) => text.is_empty(),
      Localized::PerLanguage(entries) => entries.values().all(String::is_empty),
    }
  }
}

/// Variante libre para valores opcionales: `None` se resuelve a `""`.
pub fn resolve(value: Option<&Localized>, lang: Lang) -> String {
  value.map(|v| v.resolve(lang)).unwrap_or("").to_string()
}

impl Default for Localized {
  fn default() -> Self {
    Localized::Plain(String::new())
  }
}

impl From<&str> for Localized {
  fn from(text: &str) -> Self {
    Localized::Plain(text.to_string())
  }
}

impl<const N: usize> From<[(&str, &str); N]> for Localized {
  fn from(entries: [(&str, &str); N]) -> Self {
    Localized::PerLanguage(entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLocalized {
  Plain(String),
  PerLanguage(HashMap<String, Option<String>>),
  Absent(()),
}

impl<'de> Deserialize<'de> for Localized {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = match RawLocalized::deserialize(deserializer)? {
      RawLocalized::Plain(text) => Localized::Plain(text),
      RawLocalized::PerLanguage(entries) => {
        Localized::PerLanguage(entries.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect())
      }
      RawLocalized::Absent(()) => Localized::default(),
    };
    Ok(value)
  }
}
