use tracing::debug;

use crate::domain::price_range::PriceRange;
use crate::domain::tier::TierDefinition;

/// Límite inferior cuando ninguna definición tiene un rango válido.
pub const DEFAULT_MIN: f64 = 0.0;
/// Límite superior cuando ninguna definición tiene un rango válido.
pub const DEFAULT_MAX: f64 = 1000.0;

/// Una definición junto con su rango ya interpretado (si lo hay).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
  pub definition: TierDefinition,
  pub range: Option<PriceRange>,
}

/// Catálogo de tiers de un álbum y sus límites globales.
///
/// Se construye entero con [`TierCatalog::build`] cada vez que llegan
/// definiciones nuevas; nunca se modifica en sitio. El orden de las
/// entradas es el original porque el resolver usa la primera coincidencia.
#[derive(Debug, Clone, PartialEq)]
pub struct TierCatalog {
  entries: Vec<CatalogEntry>,
  global_min: f64,
  global_max: f64,
}

impl TierCatalog {
  pub fn build(definitions: &[TierDefinition]) -> Self {
    let entries: Vec<CatalogEntry> = definitions
      .iter()
      .map(|definition| {
        let range = PriceRange::parse(&definition.range_text);
        if range.is_none() {
          debug!(kind = %definition.kind, range_text = %definition.range_text, "unparseable tier range, excluded");
        }
        CatalogEntry { definition: definition.clone(), range }
      })
      .collect();

    let (global_min, global_max) = entries
      .iter()
      .filter_map(|entry| entry.range)
      .fold(None, |acc: Option<(f64, f64)>, range| match acc {
        None => Some((range.min, range.max)),
        Some((lo, hi)) => Some((lo.min(range.min), hi.max(range.max))),
      })
      .unwrap_or((DEFAULT_MIN, DEFAULT_MAX));

    debug!(definitions = entries.len(), global_min, global_max, "tier catalog built");

    Self { entries, global_min, global_max }
  }

  pub fn entries(&self) -> &[CatalogEntry] {
    &self.entries
  }

  pub fn global_min(&self) -> f64 {
    self.global_min
  }

  pub fn global_max(&self) -> f64 {
    self.global_max
  }

  pub fn bounds(&self) -> (f64, f64) {
    (self.global_min, self.global_max)
  }

  /// `global_min <= amount <= global_max`.
  pub fn contains(&self, amount: f64) -> bool {
    self.global_min <= amount && amount <= self.global_max
  }

  /// Cantidad de definiciones con rango válido.
  pub fn usable_len(&self) -> usize {
    self.entries.iter().filter(|entry| entry.range.is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for TierCatalog {
  /// Catálogo vacío con los límites universales `[0, 1000]`.
  fn default() -> Self {
    Self { entries: Vec::new(), global_min: DEFAULT_MIN, global_max: DEFAULT_MAX }
  }
}
