//! Ad Campaign Core - Validated Creatives
//!
//! # Rules
//! 1. Subtypes come from the format table, nowhere else
//! 2. Dimensions and durations clamp, subtypes and names reject
//! 3. Ads exist only through the constructors or the factory
//! 4. A campaign owns its ads; the sequence is fixed once built

pub mod ad;
pub mod campaign;
pub mod error;
pub mod factory;
pub mod formats;

pub use ad::{Ad, AdKind, VideoSpec};
pub use campaign::{Campaign, CampaignInput, CampaignSummary, MAX_CAMPAIGN_NAME_LEN};
pub use error::{AdError, AdResult};
pub use factory::{build_ad, AdRecord};
pub use formats::{catalog, AdFormat, FormatInfo};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
