use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable/tests).
pub const BASE_DIR_ENV: &str = "PLEDGE_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config io failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid pledge.toml: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("no home directory to place config in; set PLEDGE_BASE_DIR")]
  NoHomeDir,

  #[error("missing section [{section}] in {path}")]
  MissingSection { section: String, path: String },

  #[error("section [{section}] does not match its schema: {message}")]
  Decode { section: String, message: String },

  #[error("section [{section}] cannot be written: {message}")]
  Encode { section: String, message: String },

  #[error("pledge.toml cannot be edited: {0}")]
  Document(String),
}

/// Directorios de la aplicación. Se crean al construirse.
#[derive(Debug, Clone)]
pub struct PledgePaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl PledgePaths {
  /// `PLEDGE_BASE_DIR` si está definida; si no, los directorios del sistema.
  pub fn detect() -> Result<Self, ConfigError> {
    Self::resolve(std::env::var_os(BASE_DIR_ENV))
  }

  fn resolve(base_override: Option<OsString>) -> Result<Self, ConfigError> {
    if let Some(base) = base_override.filter(|b| !b.is_empty()) {
      return Self::at(base);
    }

    let dirs = ProjectDirs::from("com", "pledge", "pledge").ok_or(ConfigError::NoHomeDir)?;
    let paths = Self {
      base_dir: dirs.config_dir().to_path_buf(),
      config_dir: dirs.config_dir().to_path_buf(),
      data_dir: dirs.data_dir().to_path_buf(),
      cache_dir: dirs.cache_dir().to_path_buf(),
    };
    paths.create_dirs()?;
    Ok(paths)
  }

  /// Layout portable: `config/`, `data/` y `cache/` bajo `base`.
  pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base_dir = base.as_ref().to_path_buf();
    let paths = Self {
      config_dir: base_dir.join("config"),
      data_dir: base_dir.join("data"),
      cache_dir: base_dir.join("cache"),
      base_dir,
    };
    paths.create_dirs()?;
    Ok(paths)
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("pledge.toml")
  }

  fn create_dirs(&self) -> Result<(), ConfigError> {
    for dir in [&self.config_dir, &self.data_dir, &self.cache_dir] {
      std::fs::create_dir_all(dir)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn base_dir_override_uses_portable_layout() {
    let tmp = tempdir().unwrap();

    let paths = PledgePaths::resolve(Some(tmp.path().as_os_str().to_owned())).unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.data_dir, tmp.path().join("data"));
    assert_eq!(paths.cache_dir, tmp.path().join("cache"));
    assert_eq!(paths.config_file(), tmp.path().join("config").join("pledge.toml"));

    assert!(paths.config_dir.is_dir());
    assert!(paths.data_dir.is_dir());
    assert!(paths.cache_dir.is_dir());
  }

  #[test]
  fn unwritable_base_is_an_error_not_a_panic() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    assert!(matches!(PledgePaths::at(&file), Err(ConfigError::Io(_))));
  }
}
