use crate::domain::catalog::TierCatalog;
use crate::domain::tier::{FallbackTier, ResolvedTier, RewardImage};

/// Escalera de respaldo, de mayor a menor umbral.
pub const FALLBACK_LADDER: [FallbackTier; 7] = [
  FallbackTier::Gold,
  FallbackTier::Silver,
  FallbackTier::Emerald,
  FallbackTier::Sapphire,
  FallbackTier::Crimson,
  FallbackTier::Wood,
  FallbackTier::ThankYou,
];

/// Resuelve el tier que corresponde a `amount`.
///
/// 1. Primera definición del catálogo (en orden original) cuyo rango
///    contenga el monto. No es "la mejor": si los rangos se solapan, gana
///    la declarada antes. Las definiciones sin rango se saltan.
/// 2. Si no hay coincidencia (catálogo vacío, hueco entre rangos, monto
///    fuera de límites), se usa [`fallback_tier`].
///
/// Es total: siempre devuelve un tier.
pub fn resolve(amount: f64, catalog: &TierCatalog) -> ResolvedTier {
  let matched = catalog
    .entries()
    .iter()
    .find(|entry| entry.range.is_some_and(|range| range.contains(amount)));

  if let Some(entry) = matched {
    return ResolvedTier {
      kind: entry.definition.kind.clone(),
      image: RewardImage::Catalog(entry.definition.image_ref.clone()),
    };
  }

  let tier = fallback_tier(amount);
  let image = match tier {
    FallbackTier::CustomSupport => RewardImage::AlbumCover,
    other => RewardImage::Plaque(other),
  };

  ResolvedTier { kind: tier.to_string(), image }
}

/// Primer escalón cuyo umbral alcanza el monto; `CustomSupport` por debajo
/// de 50. No hay techo: todo lo que supere 1000 es `Gold`.
pub fn fallback_tier(amount: f64) -> FallbackTier {
  FALLBACK_LADDER
    .into_iter()
    .find(|tier| tier.threshold().is_some_and(|threshold| amount >= threshold))
    .unwrap_or(FallbackTier::CustomSupport)
}
