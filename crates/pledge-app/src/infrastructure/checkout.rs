use async_trait::async_trait;
use pledge_core::domain::PaymentRequest;
use pledge_core::ports::{PaymentError, PaymentGateway};
use tracing::info;

/// `PaymentGateway` que no cobra nada: imprime el pedido como JSON para
/// que lo consuma el proceso de pago real.
#[derive(Debug, Clone, Default)]
pub struct StdoutCheckout;

pub fn render_request(request: &PaymentRequest) -> Result<String, serde_json::Error> {
  serde_json::to_string_pretty(request)
}

#[async_trait]
impl PaymentGateway for StdoutCheckout {
  async fn begin_checkout(&self, request: PaymentRequest) -> Result<(), PaymentError> {
    let rendered = render_request(&request).map_err(|e| PaymentError::Unavailable(e.to_string()))?;
    info!(amount = request.amount, "checkout request emitted");
    println!("{rendered}");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_camel_case_payload() {
    let request = PaymentRequest {
      album_title: "Low Tide".into(),
      artist_name: "Harbour Lights".into(),
      reward_image_ref: "img/lighthouse.png".into(),
      amount: 120.0,
    };

    let value: serde_json::Value = serde_json::from_str(&render_request(&request).unwrap()).unwrap();

    assert_eq!(
      value,
      serde_json::json!({
        "albumTitle": "Low Tide",
        "artistName": "Harbour Lights",
        "rewardImageRef": "img/lighthouse.png",
        "amount": 120.0
      })
    );
  }
}
