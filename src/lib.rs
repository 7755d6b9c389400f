pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{catalog::InMemoryCatalog, http::HttpComicService, router::RecordingRouter};
pub use config::StorefrontConfig;
pub use crate::core::{buy_now::BuyNowNavigator, checkout::CheckoutRequestValidator};
pub use utils::error::{Result, StorefrontError};
