use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identificador único de un álbum.
///
/// Lo asigna el backend; aquí solo se transporta. `new()` existe para tests
/// y datos de ejemplo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(Uuid);

impl AlbumId {
  pub fn new() -> Self {
    AlbumId(Uuid::new_v4())
  }
}

impl Default for AlbumId {
  fn default() -> Self {
    Self::new()
  }
}

impl FromStr for AlbumId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s.trim()).map(AlbumId)
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
