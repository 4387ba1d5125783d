//! Configuración de Pledge: rutas por plataforma y `pledge.toml` por secciones.
//!
//! Quien arranca la aplicación arma [`PledgePaths`] y el backend una sola
//! vez y los pasa hacia abajo; no hay estado global.

mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{BASE_DIR_ENV, ConfigError, PledgePaths};
