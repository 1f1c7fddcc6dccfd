use std::collections::BTreeMap;

use marquee_core::ports::{PreferenceError, PreferenceStore};
use tracing::warn;

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;

const SECTION: &str = "preferences";

/// Preferencias de usuario guardadas en la sección `[preferences]` de
/// `marquee.toml`.
pub struct TomlPreferenceStore {
  backend: TomlConfigBackend,
}

impl TomlPreferenceStore {
  pub fn new(backend: TomlConfigBackend) -> Self {
    Self { backend }
  }
}

impl PreferenceStore for TomlPreferenceStore {
  fn get(&self, key: &str) -> Option<String> {
    match self.backend.load_section_or_default::<BTreeMap<String, String>>(SECTION) {
      Ok(mut values) => values.remove(key),
      Err(e) => {
        warn!(error = %e, key, "could not read preferences");
        None
      }
    }
  }

  fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
    let mut values: BTreeMap<String, String> =
      self.backend.load_section_or_default(SECTION).map_err(|e| storage_error(&e))?;

    values.insert(key.to_string(), value.to_string());
    self.backend.save_section(SECTION, &values).map_err(|e| storage_error(&e))
  }
}

fn storage_error(err: &ConfigError) -> PreferenceError {
  PreferenceError::Storage(err.to_string())
}
