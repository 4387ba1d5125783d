use async_trait::async_trait;
use pledge_core::domain::{Album, AlbumId};
use pledge_core::ports::{AlbumSource, SourceError};
use std::path::PathBuf;
use tracing::debug;

/// `AlbumSource` sobre un archivo JSON con un arreglo de álbumes.
///
/// Se relee en cada consulta: cada respuesta es una copia completa y nueva
/// del álbum, igual que una llamada al backend.
pub struct JsonAlbumSource {
  path: PathBuf,
}

impl JsonAlbumSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

#[async_trait]
impl AlbumSource for JsonAlbumSource {
  async fn fetch_album(&self, id: &AlbumId) -> Result<Album, SourceError> {
    let content = tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;

    let albums: Vec<Album> =
      serde_json::from_str(&content).map_err(|e| SourceError::Malformed(format!("{}: {e}", self.path.display())))?;

    debug!(path = %self.path.display(), albums = albums.len(), "album library read");

    albums.into_iter().find(|album| album.id == *id).ok_or(SourceError::NotFound(*id))
  }
}
