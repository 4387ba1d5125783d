pub mod album;
pub mod amount;
pub mod catalog;
pub mod ids;
pub mod price_range;
pub mod resolver;
pub mod tier;

pub use album::{Album, PaymentRequest};
pub use amount::{AmountController, AmountError, ContributionState};
pub use catalog::{CatalogEntry, TierCatalog};
pub use ids::AlbumId;
pub use price_range::PriceRange;
pub use resolver::{fallback_tier, resolve};
pub use tier::{FallbackTier, PlaqueImages, ResolvedTier, RewardImage, TierDefinition};
