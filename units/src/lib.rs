//! Unitconv Unit Tables
//!
//! Static factor tables for length and weight, plus the closed-form
//! temperature formula set. Tables are immutable after construction
//! and need no synchronization.

pub mod error;
pub mod linear;
pub mod temperature;

pub use error::{UnitError, UnitSide};
pub use linear::{convert_length, convert_weight, FactorTable, LENGTH, WEIGHT};
pub use temperature::{convert_temperature, TemperatureScale};
