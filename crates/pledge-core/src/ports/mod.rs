pub mod album_source;
pub mod payment;

pub use album_source::{AlbumSource, SourceError};
pub use payment::{PaymentError, PaymentGateway};
