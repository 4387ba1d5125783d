use serde::{Deserialize, Serialize};
use std::fmt;

/// Definición de tier tal como la entrega el backend para un álbum.
///
/// Es inmutable una vez recibida. `range_text` puede venir mal formado:
/// en ese caso la definición se acepta igual, pero no aporta rango.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDefinition {
  pub kind: String,
  pub image_ref: String,
  pub range_text: String,
}

impl TierDefinition {
  pub fn new(kind: impl Into<String>, image_ref: impl Into<String>, range_text: impl Into<String>) -> Self {
    Self { kind: kind.into(), image_ref: image_ref.into(), range_text: range_text.into() }
  }
}

/// Tiers genéricos de la escalera de respaldo.
///
/// Se usan cuando ningún tier del catálogo contiene el monto. Están
/// ordenados de mayor a menor umbral; `CustomSupport` no tiene umbral y
/// usa la portada del álbum como imagen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackTier {
  Gold,
  Silver,
  Emerald,
  Sapphire,
  Crimson,
  Wood,
  ThankYou,
  CustomSupport,
}

impl FallbackTier {
  /// Monto mínimo (inclusive) para alcanzar el tier.
  pub fn threshold(self) -> Option<f64> {
    match self {
      FallbackTier::Gold => Some(1000.0),
      FallbackTier::Silver => Some(900.0),
      FallbackTier::Emerald => Some(700.0),
      FallbackTier::Sapphire => Some(500.0),
      FallbackTier::Crimson => Some(300.0),
      FallbackTier::Wood => Some(100.0),
      FallbackTier::ThankYou => Some(50.0),
      FallbackTier::CustomSupport => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      FallbackTier::Gold => "Gold",
      FallbackTier::Silver => "Silver",
      FallbackTier::Emerald => "Emerald",
      FallbackTier::Sapphire => "Sapphire",
      FallbackTier::Crimson => "Crimson",
      FallbackTier::Wood => "Wood",
      FallbackTier::ThankYou => "ThankYou",
      FallbackTier::CustomSupport => "CustomSupport",
    }
  }
}

impl fmt::Display for FallbackTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Origen de la imagen de recompensa de un tier resuelto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardImage {
  /// Imagen propia del tier, definida en el catálogo del álbum.
  Catalog(String),
  /// Placa genérica registrada para un tier de respaldo.
  Plaque(FallbackTier),
  /// La portada del álbum; la aporta quien llama, no el resolver.
  AlbumCover,
}

/// Resultado de resolver un monto. Nunca se guarda: se recalcula siempre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTier {
  pub kind: String,
  pub image: RewardImage,
}

impl ResolvedTier {
  pub fn is_fallback(&self) -> bool {
    !matches!(self.image, RewardImage::Catalog(_))
  }

  /// Convierte la imagen en una referencia concreta.
  ///
  /// Aquí se sustituye la portada del álbum para `CustomSupport`.
  pub fn image_ref<'a>(&'a self, plaques: &'a PlaqueImages, album_cover: &'a str) -> &'a str {
    match &self.image {
      RewardImage::Catalog(image_ref) => image_ref.as_str(),
      RewardImage::Plaque(tier) => plaques.image_for(*tier).unwrap_or(album_cover),
      RewardImage::AlbumCover => album_cover,
    }
  }
}

/// Registro de imágenes de las placas genéricas.
///
/// Los valores por defecto apuntan a los assets empaquetados; la sección
/// `[plaques]` de la configuración puede reemplazarlos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaqueImages {
  pub gold: String,
  pub silver: String,
  pub emerald: String,
  pub sapphire: String,
  pub crimson: String,
  pub wood: String,
  pub thank_you: String,
}

impl Default for PlaqueImages {
  fn default() -> Self {
    Self {
      gold: "assets/plaques/gold.png".into(),
      silver: "assets/plaques/silver.png".into(),
      emerald: "assets/plaques/emerald.png".into(),
      sapphire: "assets/plaques/sapphire.png".into(),
      crimson: "assets/plaques/crimson.png".into(),
      wood: "assets/plaques/wood.png".into(),
      thank_you: "assets/plaques/thank_you.png".into(),
    }
  }
}

impl PlaqueImages {
  /// `None` solo para `CustomSupport`, que no tiene placa propia.
  pub fn image_for(&self, tier: FallbackTier) -> Option<&str> {
    let image = match tier {
      FallbackTier::Gold => &self.gold,
      FallbackTier::Silver => &self.silver,
      FallbackTier::Emerald => &self.emerald,
      FallbackTier::Sapphire => &self.sapphire,
      FallbackTier::Crimson => &self.crimson,
      FallbackTier::Wood => &self.wood,
      FallbackTier::ThankYou => &self.thank_you,
      FallbackTier::CustomSupport => return None,
    };

    Some(image.as_str())
  }
}
