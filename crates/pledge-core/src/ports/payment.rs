use async_trait::async_trait;

use crate::domain::PaymentRequest;

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
  #[error("payment rejected: {0}")]
  Rejected(String),

  #[error("payment provider unavailable: {0}")]
  Unavailable(String),
}

// El colaborador de pagos se encarga de toda la transacción.
// Desde aquí solo se le entregan los datos a mostrar y el monto.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
  async fn begin_checkout(&self, request: PaymentRequest) -> Result<(), PaymentError>;
}
