use std::collections::HashMap;
use std::sync::Mutex;

/// Clave bajo la que se guarda el último idioma elegido.
pub const LANG_KEY: &str = "lang";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
  #[error("storage error: {0}")]
  Storage(String),
}

/// Almacén clave-valor persistente entre sesiones.
///
/// El controlador solo lo usa para el idioma, pero no sabe nada del
/// soporte real (fichero TOML, memoria...).
pub trait PreferenceStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
  values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(key: &str, value: &str) -> Self {
    let store = Self::default();
    if let Ok(mut guard) = store.values.lock() {
      guard.insert(key.to_string(), value.to_string());
    }
    store
  }
}

impl PreferenceStore for MemoryPreferenceStore {
  fn get(&self, key: &str) -> Option<String> {
    self.values.lock().ok()?.get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
    let mut guard = self
      .values
      .lock()
      .map_err(|_| PreferenceError::Storage("preference mutex poisoned".to_string()))?;
    guard.insert(key.to_string(), value.to_string());
    Ok(())
  }
}
