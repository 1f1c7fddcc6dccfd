use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable, tests).
pub const BASE_DIR_ENV: &str = "MARQUEE_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorio donde vive `marquee.toml`.
#[derive(Debug, Clone)]
pub struct MarqueePaths {
  pub config_dir: PathBuf,
}

impl MarqueePaths {
  /// `MARQUEE_BASE_DIR/config` si la variable está definida; si no, el
  /// directorio de configuración del usuario.
  pub fn new() -> Result<Self, ConfigError> {
    let config_dir = match std::env::var(BASE_DIR_ENV) {
      Ok(base) => PathBuf::from(base).join("config"),
      Err(_) => {
        let proj_dirs =
          ProjectDirs::from("com", "marquee", "marquee").ok_or(ConfigError::Directories)?;
        proj_dirs.config_dir().to_path_buf()
      }
    };

    Self::at(config_dir)
  }

  /// Ruta explícita; crea el directorio si no existe.
  pub fn at(config_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    Ok(Self { config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("marquee.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_marquee_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new(BASE_DIR_ENV, tmp.path().to_str().unwrap());

    let paths = MarqueePaths::new().unwrap();

    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.config_file(), tmp.path().join("config").join("marquee.toml"));

    assert!(paths.config_dir.exists());
    assert!(!tmp.path().join("cache").exists());
  }
}
