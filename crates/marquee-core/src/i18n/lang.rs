use std::{fmt, str::FromStr};

use chrono::Locale;

/// Idiomas soportados por el sitio.
///
/// Cada idioma define su convención de fechas y el mensaje que muestra
/// una cuenta atrás cuando el evento ya empezó.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
  #[default]
  En,
  Es,
}

impl Lang {
  /// Idioma de respaldo para textos sin traducción.
  pub const FALLBACK: Lang = Lang::En;

  pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

  /// Código corto usado en los datos, el marcado y la preferencia guardada.
  pub fn code(&self) -> &'static str {
    match self {
      Lang::En => "en",
      Lang::Es => "es",
    }
  }

  pub fn locale(&self) -> Locale {
    match self {
      Lang::En => Locale::en_US,
      Lang::Es => Locale::es_ES,
    }
  }

  pub fn live_message(&self) -> &'static str {
    match self {
      Lang::En => "Now live / See you there",
      Lang::Es => "En curso / Nos vemos ahí",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct UnsupportedLang(pub String);

impl FromStr for Lang {
  type Err = UnsupportedLang;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" => Ok(Lang::En),
      "es" => Ok(Lang::Es),
      _ => Err(UnsupportedLang(s.to_string())),
    }
  }
}

impl fmt::Display for Lang {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
