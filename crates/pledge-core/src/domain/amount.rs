use tracing::{debug, info};

use crate::domain::catalog::TierCatalog;

/// Monto mínimo aceptado desde el slider y desde la entrada libre.
pub const MIN_AMOUNT: f64 = 1.0;

/// Estado del selector de monto.
///
/// Dos estados explícitos en vez de un número más un booleano sueltos:
///
/// - `Slider`: el monto lo controla el slider acotado a `[1, global_max]`.
/// - `Custom`: el slider llegó a su máximo y el usuario escribe el monto
///   libremente, sin techo.
///
/// `Slider → Custom` solo ocurre al llevar el slider al máximo.
/// `Custom → Slider` solo ocurre al cancelar explícitamente (o si un
/// catálogo nuevo obliga a reiniciar el monto).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContributionState {
  Slider { amount: f64 },
  Custom { amount: f64 },
}

impl ContributionState {
  pub fn amount(&self) -> f64 {
    match *self {
      ContributionState::Slider { amount } | ContributionState::Custom { amount } => amount,
    }
  }

  pub fn is_custom(&self) -> bool {
    matches!(self, ContributionState::Custom { .. })
  }
}

/// Motivo por el que se rechazó un cambio de monto. El estado no cambia.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AmountError {
  #[error("amount is not a finite number")]
  NotFinite,

  #[error("amount {0} is below the minimum of 1")]
  BelowMinimum(f64),

  #[error("slider input ignored while custom mode is active")]
  SliderInactive,

  #[error("custom amount requires custom mode")]
  CustomInactive,
}

/// Dueño del monto seleccionado.
///
/// Es el único estado mutable del motor de tiers. Se reconcilia contra los
/// límites del catálogo cada vez que el catálogo cambia.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountController {
  state: ContributionState,
}

impl AmountController {
  /// Arranca en modo slider con `amount = global_min`.
  pub fn initialize(catalog: &TierCatalog) -> Self {
    Self { state: ContributionState::Slider { amount: catalog.global_min() } }
  }

  pub fn state(&self) -> ContributionState {
    self.state
  }

  pub fn amount(&self) -> f64 {
    self.state.amount()
  }

  pub fn is_custom(&self) -> bool {
    self.state.is_custom()
  }

  /// Límites del slider para un catálogo: `[1, global_max]`.
  ///
  /// Si el catálogo tiene un máximo menor que 1 el slider queda fijo en 1.
  pub fn slider_bounds(catalog: &TierCatalog) -> (f64, f64) {
    (MIN_AMOUNT, catalog.global_max().max(MIN_AMOUNT))
  }

  /// Reconciliación tras reconstruir el catálogo.
  ///
  /// Si el monto sigue dentro de `[global_min, global_max]` no se toca
  /// (tampoco el modo). Si no, vuelve a `global_min` en modo slider.
  /// Devuelve `true` si hubo reinicio.
  pub fn on_catalog_changed(&mut self, catalog: &TierCatalog) -> bool {
    let amount = self.amount();
    if catalog.contains(amount) {
      return false;
    }

    let reset_to = catalog.global_min();
    info!(previous = amount, reset_to, "amount outside new catalog bounds, resetting");
    self.state = ContributionState::Slider { amount: reset_to };
    true
  }

  /// Valor recibido del slider.
  ///
  /// Se acota a los límites del slider. Al llegar al máximo del catálogo
  /// pasa a modo custom conservando el valor.
  pub fn set_from_slider(&mut self, value: f64, catalog: &TierCatalog) -> Result<ContributionState, AmountError> {
    if !value.is_finite() {
      return Err(AmountError::NotFinite);
    }
    if self.is_custom() {
      return Err(AmountError::SliderInactive);
    }

    let (lo, hi) = Self::slider_bounds(catalog);
    let amount = value.clamp(lo, hi);

    self.state = if amount >= catalog.global_max() {
      debug!(amount, "slider reached its maximum, switching to custom entry");
      ContributionState::Custom { amount }
    } else {
      ContributionState::Slider { amount }
    };

    Ok(self.state)
  }

  /// Monto escrito a mano. Sin techo; por debajo de 1 se rechaza.
  pub fn set_custom_amount(&mut self, value: f64) -> Result<(), AmountError> {
    if !value.is_finite() {
      return Err(AmountError::NotFinite);
    }
    if value < MIN_AMOUNT {
      return Err(AmountError::BelowMinimum(value));
    }
    if !self.is_custom() {
      return Err(AmountError::CustomInactive);
    }

    self.state = ContributionState::Custom { amount: value };
    Ok(())
  }

  /// Vuelve al slider con el monto en `global_max`, sin importar lo que se
  /// haya escrito en modo custom.
  pub fn cancel_custom_mode(&mut self, catalog: &TierCatalog) {
    debug!(amount = catalog.global_max(), "custom entry cancelled");
    self.state = ContributionState::Slider { amount: catalog.global_max() };
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::tier::TierDefinition;

  fn catalog(ranges: &[&str]) -> TierCatalog {
    let defs: Vec<TierDefinition> = ranges.iter().map(|r| TierDefinition::new("T", "img/t.png", *r)).collect();
    TierCatalog::build(&defs)
  }

  fn at(amount: f64) -> AmountController {
    AmountController { state: ContributionState::Slider { amount } }
  }

  #[test]
  fn initialize_starts_at_global_min_in_slider_mode() {
    let ctl = AmountController::initialize(&catalog(&["$25 - $400"]));

    assert_eq!(ctl.state(), ContributionState::Slider { amount: 25.0 });
    assert!(!ctl.is_custom());
  }

  #[test]
  fn catalog_change_resets_amount_outside_bounds() {
    let mut ctl = at(400.0);

    assert!(ctl.on_catalog_changed(&catalog(&["$500 - $1000"])));
    assert_eq!(ctl.amount(), 500.0);
  }

  #[test]
  fn catalog_change_keeps_amount_inside_bounds() {
    let mut ctl = at(400.0);

    assert!(!ctl.on_catalog_changed(&catalog(&["$100 - $1000"])));
    assert_eq!(ctl.amount(), 400.0);
  }

  #[test]
  fn catalog_change_resets_custom_amount_back_to_slider() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);
    ctl.set_from_slider(1000.0, &cat).unwrap();
    ctl.set_custom_amount(5000.0).unwrap();

    assert!(ctl.on_catalog_changed(&catalog(&["$10 - $200"])));
    assert_eq!(ctl.state(), ContributionState::Slider { amount: 10.0 });
  }

  #[test]
  fn slider_max_switches_to_custom_mode() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);

    assert_eq!(ctl.set_from_slider(1000.0, &cat), Ok(ContributionState::Custom { amount: 1000.0 }));
    assert!(ctl.is_custom());
  }

  #[test]
  fn slider_below_max_stays_in_slider_mode() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);

    assert_eq!(ctl.set_from_slider(250.0, &cat), Ok(ContributionState::Slider { amount: 250.0 }));
  }

  #[test]
  fn slider_values_are_clamped() {
    let cat = TierCatalog::default();

    let mut ctl = AmountController::initialize(&cat);
    assert_eq!(ctl.set_from_slider(0.2, &cat), Ok(ContributionState::Slider { amount: 1.0 }));

    let mut ctl = AmountController::initialize(&cat);
    assert_eq!(ctl.set_from_slider(4000.0, &cat), Ok(ContributionState::Custom { amount: 1000.0 }));
  }

  #[test]
  fn slider_is_ignored_in_custom_mode() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);
    ctl.set_from_slider(1000.0, &cat).unwrap();
    ctl.set_custom_amount(2500.0).unwrap();

    assert_eq!(ctl.set_from_slider(10.0, &cat), Err(AmountError::SliderInactive));
    assert_eq!(ctl.amount(), 2500.0);
  }

  #[test]
  fn custom_amount_rules() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);
    ctl.set_from_slider(1000.0, &cat).unwrap();

    assert_eq!(ctl.set_custom_amount(0.5), Err(AmountError::BelowMinimum(0.5)));
    assert_eq!(ctl.amount(), 1000.0);

    assert_eq!(ctl.set_custom_amount(f64::NAN), Err(AmountError::NotFinite));
    assert_eq!(ctl.amount(), 1000.0);

    assert_eq!(ctl.set_custom_amount(5000.0), Ok(()));
    assert_eq!(ctl.state(), ContributionState::Custom { amount: 5000.0 });

    // Escribir un valor bajo no devuelve al slider.
    assert_eq!(ctl.set_custom_amount(3.0), Ok(()));
    assert!(ctl.is_custom());
  }

  #[test]
  fn custom_amount_requires_custom_mode() {
    let cat = TierCatalog::default();
    let mut ctl = AmountController::initialize(&cat);

    assert_eq!(ctl.set_custom_amount(5000.0), Err(AmountError::CustomInactive));
    assert_eq!(ctl.amount(), 0.0);
  }

  #[test]
  fn cancel_restores_slider_max_regardless_of_custom_value() {
    let cat = catalog(&["$50 - $750"]);
    let mut ctl = AmountController::initialize(&cat);
    ctl.set_from_slider(750.0, &cat).unwrap();
    ctl.set_custom_amount(12_345.0).unwrap();

    ctl.cancel_custom_mode(&cat);

    assert_eq!(ctl.state(), ContributionState::Slider { amount: 750.0 });
  }

  #[test]
  fn slider_bounds_never_collapse_below_one() {
    assert_eq!(AmountController::slider_bounds(&TierCatalog::default()), (1.0, 1000.0));
    assert_eq!(AmountController::slider_bounds(&catalog(&["$0 - $0"])), (1.0, 1.0));
  }
}
