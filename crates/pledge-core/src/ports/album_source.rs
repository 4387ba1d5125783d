use crate::domain::{Album, AlbumId};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("album not found: {0}")]
  NotFound(AlbumId),

  #[error("io error: {0}")]
  Io(String),

  #[error("malformed album data: {0}")]
  Malformed(String),
}

/// Port que abstrae de dónde vienen los álbumes (API, archivo, caché...).
///
/// Cada respuesta reemplaza por completo los datos anteriores del álbum;
/// el servicio reconstruye el catálogo de tiers a partir de ella.
#[async_trait::async_trait]
pub trait AlbumSource: Send + Sync {
  async fn fetch_album(&self, id: &AlbumId) -> Result<Album, SourceError>;
}
