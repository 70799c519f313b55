//! Conversion request and result shapes.

use serde::{Deserialize, Serialize};

/// A request to convert a value between two units.
///
/// Unit validity is not assumed here; the dispatcher checks membership
/// against the relevant unit set and reports `InvalidUnit` on a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The numeric value to convert.
    pub value: f64,
    /// Source unit name or currency code.
    pub from_unit: String,
    /// Target unit name or currency code.
    pub to_unit: String,
}

impl ConversionRequest {
    /// Create a new conversion request.
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// A completed conversion.
///
/// `from_unit`/`to_unit` echo the request spelling unchanged; the
/// converted value is already rounded per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The value as submitted.
    pub original_value: f64,
    /// The converted, rounded value.
    pub converted_value: f64,
    /// Source unit as submitted.
    pub from_unit: String,
    /// Target unit as submitted.
    pub to_unit: String,
}

impl ConversionResult {
    /// Create a new conversion result.
    pub fn new(
        original_value: f64,
        converted_value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            original_value,
            converted_value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}
