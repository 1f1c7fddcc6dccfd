use marquee_core::Lang;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::backend::ConfigBackend;
use crate::paths::ConfigError;

const SECTION: &str = "site";

/// Sección `[site]` de `marquee.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
  /// URL base del sitio o directorio local que contiene `data/`.
  #[serde(default = "default_source")]
  pub source: String,

  /// Idioma cuando no hay preferencia guardada.
  #[serde(default = "default_lang")]
  pub default_lang: String,
}

fn default_source() -> String {
  ".".into()
}

fn default_lang() -> String {
  Lang::default().code().into()
}

impl Default for SiteConfig {
  fn default() -> Self {
    SiteConfig { source: default_source(), default_lang: default_lang() }
  }
}

impl SiteConfig {
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_or_default(SECTION)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }

  /// Idioma por defecto ya validado; un código desconocido cae a `en`.
  pub fn default_lang(&self) -> Lang {
    self.default_lang.parse::<Lang>().unwrap_or_else(|_| {
      warn!(code = %self.default_lang, "unsupported default_lang in config, using en");
      Lang::default()
    })
  }

  /// `true` si `source` parece una URL http(s).
  pub fn source_is_remote(&self) -> bool {
    let source = self.source.trim_start();
    source.starts_with("http://") || source.starts_with("https://")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{MarqueePaths, TomlConfigBackend};
  use tempfile::tempdir;

  #[test]
  fn defaults_when_section_missing_and_round_trips() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(MarqueePaths::at(tmp.path().join("config")).unwrap());

    let cfg = SiteConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert!(!cfg.source_is_remote());

    let cfg = SiteConfig { source: "https://band.example".into(), default_lang: "es".into() };
    cfg.save_to(&backend).unwrap();

    let loaded = SiteConfig::load_from(&backend).unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.default_lang(), Lang::Es);
    assert!(loaded.source_is_remote());
  }

  #[test]
  fn unknown_default_lang_falls_back() {
    let cfg = SiteConfig { default_lang: "de".into(), ..SiteConfig::default() };
    assert_eq!(cfg.default_lang(), Lang::En);
  }
}
