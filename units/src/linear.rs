//! Factor-table conversions for length and weight.

use unitconv_common::round_dp;

use crate::error::{UnitError, UnitResult, UnitSide};

/// Multiplicative factors expressing each unit in a fixed base unit.
///
/// Entries keep declaration order so the supported-unit listing in
/// error messages is deterministic. The base unit maps to 1.0.
pub struct FactorTable {
    entries: &'static [(&'static str, f64)],
}

impl FactorTable {
    /// Create a table over a static entry slice.
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    /// Look up the factor for a normalized unit name.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// Unit names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    fn validated_factor(&self, unit: &str, side: UnitSide) -> UnitResult<f64> {
        let unit = unit.to_lowercase();
        self.factor(&unit).ok_or_else(|| UnitError::Invalid {
            side,
            unit,
            supported: self.names(),
        })
    }

    /// Convert through the base unit: `value * factor[from] / factor[to]`,
    /// rounded to 6 decimal places.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> UnitResult<f64> {
        let from = self.validated_factor(from_unit, UnitSide::Source)?;
        let to = self.validated_factor(to_unit, UnitSide::Target)?;

        let in_base = value * from;
        Ok(round_dp(in_base / to, 6))
    }
}

/// Factors to meters.
pub static LENGTH: FactorTable = FactorTable::new(&[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
]);

/// Factors to kilograms.
pub static WEIGHT: FactorTable = FactorTable::new(&[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("milligram", 1e-6),
    ("pound", 0.453_592),
    ("ounce", 0.028_349_5),
    ("ton", 1000.0),
]);

/// Convert a length value between supported units.
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> UnitResult<f64> {
    LENGTH.convert(value, from_unit, to_unit)
}

/// Convert a weight value between supported units.
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> UnitResult<f64> {
    WEIGHT.convert(value, from_unit, to_unit)
}
