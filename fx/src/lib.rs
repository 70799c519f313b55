//! Unitconv FX
//!
//! Currency rate resolution for the conversion engine.
//!
//! # Features
//!
//! - Pluggable rate providers behind an async trait
//! - HTTP provider for exchangerate-api style endpoints
//! - Process-lifetime rate cache keyed by ordered currency pair
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use unitconv_common::Currency;
//! use unitconv_fx::{HttpRateProvider, RateCache, RateResolver};
//!
//! let provider = HttpRateProvider::new(
//!     "https://api.exchangerate-api.com/v4/latest",
//!     Duration::from_secs(5),
//! )?;
//! let resolver = RateResolver::new(Arc::new(provider), Arc::new(RateCache::new()));
//!
//! let rate = resolver.resolve(&Currency::new("USD"), &Currency::new("EUR")).await?;
//! ```

pub mod cache;
pub mod error;
pub mod provider;
pub mod resolver;

pub use cache::{RateCache, SharedRateCache};
pub use error::{FxError, FxResult};
pub use provider::{HttpRateProvider, RateProvider, RateSheet};
pub use resolver::RateResolver;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
