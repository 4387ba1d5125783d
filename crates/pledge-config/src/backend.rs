use crate::io::atomic_write_str;
use crate::paths::{ConfigError, PledgePaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;
use toml_edit::{DocumentMut, Item};

/// Acceso por secciones (`[plaques]`, `[library]`, ...) al archivo de config.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// `pledge.toml` dentro de `config_dir`.
///
/// Las lecturas usan `toml` + serde; las escrituras pasan por `toml_edit`
/// para no perder comentarios ni el orden que haya puesto el usuario.
pub struct TomlConfigBackend {
  paths: PledgePaths,
}

impl TomlConfigBackend {
  pub fn new(paths: PledgePaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &PledgePaths {
    &self.paths
  }

  /// Como `load_section`, pero un archivo o una sección ausentes dan
  /// `T::default()` en vez de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    match self.section_value(section)? {
      Some(value) => decode_section(section, value),
      None => {
        debug!(section, "config section absent, using defaults");
        Ok(T::default())
      }
    }
  }

  /// Contenido del archivo; `None` si todavía no existe.
  fn read_config(&self) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(self.paths.config_file()) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  fn section_value(&self, section: &str) -> Result<Option<toml::Value>, ConfigError> {
    let Some(content) = self.read_config()? else {
      return Ok(None);
    };

    let mut root: toml::Table = toml::from_str(&content)?;
    Ok(root.remove(section))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let value = self.section_value(section)?.ok_or_else(|| ConfigError::MissingSection {
      section: section.to_string(),
      path: self.paths.config_file().display().to_string(),
    })?;

    decode_section(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let mut doc = match self.read_config()? {
      Some(content) => content.parse::<DocumentMut>().map_err(|e| ConfigError::Document(e.to_string()))?,
      None => DocumentMut::new(),
    };

    // serde -> texto TOML suelto -> tabla de toml_edit
    let rendered = toml::to_string(value).map_err(|e| encode_error(section, e))?;
    let table = rendered.parse::<DocumentMut>().map_err(|e| encode_error(section, e))?.as_table().clone();

    doc[section] = Item::Table(table);

    let path = self.paths.config_file();
    atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");

    Ok(())
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
  value.try_into().map_err(|e| ConfigError::Decode { section: section.to_string(), message: e.to_string() })
}

fn encode_error(section: &str, e: impl std::fmt::Display) -> ConfigError {
  ConfigError::Encode { section: section.to_string(), message: e.to_string() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  #[serde(default)]
  struct Sample {
    name: String,
    limit: u32,
  }

  impl Default for Sample {
    fn default() -> Self {
      Self { name: "default".into(), limit: 10 }
    }
  }

  fn backend(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(PledgePaths::at(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());

    let loaded: Sample = backend.load_section_with_default("sample").unwrap();

    assert_eq!(loaded, Sample::default());
    assert!(backend.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn missing_section_yields_default() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let loaded: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(err.to_string().contains("missing section [sample]"));
  }

  #[test]
  fn saved_section_loads_back() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    let value = Sample { name: "custom".into(), limit: 42 };

    backend.save_section("sample", &value).unwrap();

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), value);
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    let original = "# ajustes del usuario\n[other]\nx = 1 # importante\n";
    fs::write(backend.paths().config_file(), original).unwrap();

    backend.save_section("sample", &Sample::default()).unwrap();

    let written = fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(written.contains("# ajustes del usuario"));
    assert!(written.contains("x = 1 # importante"));
    assert!(written.contains("[sample]"));
  }

  #[test]
  fn section_with_wrong_types_is_a_decode_error() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    fs::write(backend.paths().config_file(), "[sample]\nlimit = \"many\"\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Decode { ref section, .. } if section == "sample"));
  }

  #[test]
  fn invalid_toml_is_reported() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    fs::write(backend.paths().config_file(), "this is = = not toml").unwrap();

    let err = backend.load_section_with_default::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
  }
}
