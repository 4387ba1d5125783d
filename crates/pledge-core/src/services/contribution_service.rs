use tracing::{debug, info};

use crate::domain::amount::MIN_AMOUNT;
use crate::domain::resolver;
use crate::domain::{
  Album, AlbumId, AmountController, AmountError, ContributionState, PaymentRequest, PlaqueImages, ResolvedTier,
  TierCatalog,
};
use crate::errors::CoreError;
use crate::ports::{AlbumSource, PaymentGateway, SourceError};

/// Orquesta la selección de aporte para el álbum que se está viendo.
///
/// Mantiene el álbum cargado, su catálogo (reconstruido entero en cada
/// carga) y el controlador de monto. El tier no se guarda: se resuelve
/// cada vez que se pide.
pub struct ContributionService<A, P>
where
  A: AlbumSource,
  P: PaymentGateway,
{
  source: A,
  gateway: P,
  album: Option<Album>,
  catalog: TierCatalog,
  amount: AmountController,
}

impl<A, P> ContributionService<A, P>
where
  A: AlbumSource,
  P: PaymentGateway,
{
  /// Sin álbum todavía: catálogo por defecto `[0, 1000]`.
  pub fn new(source: A, gateway: P) -> Self {
    let catalog = TierCatalog::default();
    let amount = AmountController::initialize(&catalog);
    Self { source, gateway, album: None, catalog, amount }
  }

  // -------- ALBUM --------

  /// Pide el álbum a la fuente y lo aplica.
  ///
  /// Si la fuente falla, el álbum, el catálogo y el monto anteriores se
  /// conservan intactos.
  pub async fn load_album(&mut self, id: &AlbumId) -> Result<(), CoreError> {
    let album = self.source.fetch_album(id).await.map_err(|e| match e {
      SourceError::NotFound(_) => CoreError::NotFound,
      other => CoreError::AlbumSource(other.to_string()),
    })?;

    self.apply_album(album);
    Ok(())
  }

  /// Reemplaza el álbum, reconstruye el catálogo y reconcilia el monto.
  pub fn apply_album(&mut self, album: Album) {
    let catalog = TierCatalog::build(&album.tiers);
    let reset = self.amount.on_catalog_changed(&catalog);

    debug!(album = %album.id, reset, amount = self.amount.amount(), "album applied");

    self.catalog = catalog;
    self.album = Some(album);
  }

  pub fn album(&self) -> Option<&Album> {
    self.album.as_ref()
  }

  pub fn catalog(&self) -> &TierCatalog {
    &self.catalog
  }

  // -------- AMOUNT --------

  pub fn state(&self) -> ContributionState {
    self.amount.state()
  }

  pub fn amount(&self) -> f64 {
    self.amount.amount()
  }

  pub fn slider_bounds(&self) -> (f64, f64) {
    AmountController::slider_bounds(&self.catalog)
  }

  pub fn slide(&mut self, value: f64) -> Result<ContributionState, AmountError> {
    self.amount.set_from_slider(value, &self.catalog)
  }

  pub fn enter_custom(&mut self, value: f64) -> Result<(), AmountError> {
    self.amount.set_custom_amount(value)
  }

  pub fn cancel_custom(&mut self) {
    self.amount.cancel_custom_mode(&self.catalog)
  }

  /// Lleva el monto a `value` como lo haría el usuario: mueve el slider y,
  /// si `value` supera su máximo, escribe el valor en modo custom.
  ///
  /// `value` es un monto escrito, no una posición del slider: por debajo
  /// de 1 se rechaza en vez de acotarse.
  pub fn select_amount(&mut self, value: f64) -> Result<ContributionState, AmountError> {
    if !value.is_finite() {
      return Err(AmountError::NotFinite);
    }
    if value < MIN_AMOUNT {
      return Err(AmountError::BelowMinimum(value));
    }
    if self.amount.is_custom() {
      self.amount.cancel_custom_mode(&self.catalog);
    }

    let state = self.amount.set_from_slider(value, &self.catalog)?;
    if state.is_custom() && value > state.amount() {
      self.amount.set_custom_amount(value)?;
    }

    Ok(self.amount.state())
  }

  // -------- TIER / CHECKOUT --------

  pub fn resolved_tier(&self) -> ResolvedTier {
    resolver::resolve(self.amount.amount(), &self.catalog)
  }

  /// Datos para el colaborador de pagos.
  pub fn payment_request(&self, plaques: &PlaqueImages) -> Result<PaymentRequest, CoreError> {
    let album = self.album.as_ref().ok_or(CoreError::NoAlbumLoaded)?;
    let tier = self.resolved_tier();

    Ok(PaymentRequest {
      album_title: album.title.clone(),
      artist_name: album.artist_name.clone(),
      reward_image_ref: tier.image_ref(plaques, &album.cover_ref).to_string(),
      amount: self.amount.amount(),
    })
  }

  /// Entrega el pedido al gateway y lo devuelve para mostrarlo.
  pub async fn checkout(&self, plaques: &PlaqueImages) -> Result<PaymentRequest, CoreError> {
    let request = self.payment_request(plaques)?;

    info!(album = %request.album_title, amount = request.amount, "handing contribution to payment gateway");

    self.gateway.begin_checkout(request.clone()).await.map_err(|e| CoreError::Payment(e.to_string()))?;

    Ok(request)
  }
}
