use pledge_config::{ConfigBackend, ConfigError, PledgePaths, TomlConfigBackend};
use pledge_core::domain::PlaqueImages;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PLAQUES_SECTION: &str = "plaques";
const LIBRARY_SECTION: &str = "library";

/// Sección `[library]`: de dónde lee álbumes el adapter JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
  /// Archivo JSON con un arreglo de álbumes. Sin valor se usa
  /// `<data_dir>/albums.json`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<PathBuf>,
}

impl LibraryConfig {
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default(LIBRARY_SECTION)
  }

  pub fn library_path(&self, paths: &PledgePaths) -> PathBuf {
    self.path.clone().unwrap_or_else(|| paths.data_dir.join("albums.json"))
  }
}

/// Sección `[plaques]`: imagen registrada para cada tier de respaldo.
///
/// Se escribe de vuelta al cargar para que el usuario vea (y pueda editar)
/// los valores por defecto.
pub fn load_plaques(backend: &TomlConfigBackend) -> Result<PlaqueImages, ConfigError> {
  let plaques: PlaqueImages = backend.load_section_with_default(PLAQUES_SECTION)?;
  backend.save_section(PLAQUES_SECTION, &plaques)?;
  Ok(plaques)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn library_defaults_to_data_dir() {
    let dir = tempdir().unwrap();
    let paths = PledgePaths::at(dir.path()).unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = LibraryConfig::load(&backend).unwrap();

    assert_eq!(cfg.library_path(&paths), dir.path().join("data").join("albums.json"));
  }

  #[test]
  fn library_path_from_config_wins() {
    let dir = tempdir().unwrap();
    let paths = PledgePaths::at(dir.path()).unwrap();
    fs::write(paths.config_file(), "[library]\npath = \"/srv/albums.json\"\n").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = LibraryConfig::load(&backend).unwrap();

    assert_eq!(cfg.library_path(&paths), PathBuf::from("/srv/albums.json"));
  }

  #[test]
  fn plaques_are_materialized_with_overrides_kept() {
    let dir = tempdir().unwrap();
    let paths = PledgePaths::at(dir.path()).unwrap();
    fs::write(paths.config_file(), "[plaques]\ngold = \"cdn/gold.webp\"\n").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let plaques = load_plaques(&backend).unwrap();

    assert_eq!(plaques.gold, "cdn/gold.webp");
    assert_eq!(plaques.wood, PlaqueImages::default().wood);
    let written = fs::read_to_string(paths.config_file()).unwrap();
    assert!(written.contains("thank_you"));
  }
}
