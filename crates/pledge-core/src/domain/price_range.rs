use serde::{Deserialize, Serialize};
use std::fmt;

/// Símbolos de moneda que se eliminan antes de interpretar el texto.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '¢', '₩', '₹', '₽'];

/// Intervalo numérico derivado del texto de un tier (`"$100 - $500"`).
///
/// Los extremos se guardan **tal como vienen escritos**: no se valida
/// `min <= max` ni se intercambian. Un rango invertido (`"$500 - $100"`)
/// se conserva así y nunca contendrá ningún monto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
  pub min: f64,
  pub max: f64,
}

impl PriceRange {
  /// Interpreta un rango textual.
  ///
  /// Gramática informal: `"$"? número espacios* "-" espacios* "$"? número`.
  ///
  /// Devuelve `None` (nunca falla de otra forma) si:
  /// - no hay guion,
  /// - hay más de dos segmentos (`"$100-$200-$300"`),
  /// - algún segmento no es numérico o está vacío,
  /// - el texto está vacío.
  pub fn parse(text: &str) -> Option<Self> {
    let cleaned: String = text.chars().filter(|c| !CURRENCY_SYMBOLS.contains(c)).collect();

    let segments: Vec<&str> = cleaned.split('-').collect();
    let [first, second] = segments.as_slice() else {
      return None;
    };

    let min = parse_amount(first)?;
    let max = parse_amount(second)?;

    Some(Self { min, max })
  }

  /// `min <= amount <= max`, ambos extremos inclusive.
  pub fn contains(&self, amount: f64) -> bool {
    self.min <= amount && amount <= self.max
  }

  pub fn is_inverted(&self) -> bool {
    self.min > self.max
  }
}

impl fmt::Display for PriceRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "${} - ${}", self.min, self.max)
  }
}

fn parse_amount(segment: &str) -> Option<f64> {
  let trimmed = segment.trim();
  if trimmed.is_empty() {
    return None;
  }

  trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
