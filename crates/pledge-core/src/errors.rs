// crates/pledge-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Pledge.
///
/// Las capas superiores (CLI, UI, etc.) deberían mapear este error
/// a mensajes de usuario o logs. Nada del cálculo de tiers produce errores:
/// solo las fronteras con el mundo exterior (fuente de álbumes, pagos).
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("album source error: {0}")]
  AlbumSource(String),

  #[error("payment error: {0}")]
  Payment(String),

  #[error("no album loaded")]
  NoAlbumLoaded,

  #[error("not found")]
  NotFound,
}
