use serde::{Deserialize, Serialize};

use crate::domain::ids::AlbumId;
use crate::domain::tier::TierDefinition;

/// Álbum tal como llega del backend.
///
/// El núcleo solo usa lo necesario para resolver tiers y armar el pedido
/// de pago: título, artista, portada y las definiciones de tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
  pub id: AlbumId,
  pub title: String,
  pub artist_name: String,
  /// Portada; también es la imagen de `CustomSupport`.
  pub cover_ref: String,
  /// Puede venir vacío: entonces rigen los límites por defecto `[0, 1000]`.
  #[serde(default)]
  pub tiers: Vec<TierDefinition>,
}

/// Datos que se entregan al colaborador de pagos.
///
/// Este núcleo no procesa pagos: solo aporta lo que se muestra y el monto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
  pub album_title: String,
  pub artist_name: String,
  pub reward_image_ref: String,
  pub amount: f64,
}
