//! Unitconv Common Types
//!
//! This crate contains shared types used across the unitconv service:
//! currency identifiers, conversion request/result shapes, and the
//! decimal rounding helper every conversion kind goes through.

pub mod conversion;
pub mod currency;
pub mod rounding;

pub use conversion::*;
pub use currency::*;
pub use rounding::*;
