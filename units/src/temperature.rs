//! Temperature conversion between Celsius, Fahrenheit and Kelvin.

use serde::{Deserialize, Serialize};
use std::fmt;
use unitconv_common::round_dp;

use crate::error::{UnitError, UnitResult, UnitSide};

/// The three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Scale names in declaration order, as listed in error messages.
    pub const NAMES: [&'static str; 3] = ["celsius", "fahrenheit", "kelvin"];

    fn parse(unit: &str, side: UnitSide) -> UnitResult<Self> {
        match unit.to_lowercase().as_str() {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            "kelvin" => Ok(Self::Kelvin),
            other => Err(UnitError::Invalid {
                side,
                unit: other.to_string(),
                supported: Self::NAMES.to_vec(),
            }),
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::Kelvin => value + 273.15,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "celsius"),
            Self::Fahrenheit => write!(f, "fahrenheit"),
            Self::Kelvin => write!(f, "kelvin"),
        }
    }
}

/// Convert a temperature between supported scales, rounded to 2
/// decimal places.
///
/// Identity conversions skip the formulas entirely, which also avoids
/// a floating-point round trip through Celsius.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> UnitResult<f64> {
    let from = TemperatureScale::parse(from_unit, UnitSide::Source)?;
    let to = TemperatureScale::parse(to_unit, UnitSide::Target)?;

    if from == to {
        return Ok(round_dp(value, 2));
    }

    // Fahrenheit <-> Kelvin composes through Celsius.
    Ok(round_dp(to.from_celsius(from.to_celsius(value)), 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit_freezing() {
        assert_eq!(convert_temperature(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit_boiling() {
        assert_eq!(convert_temperature(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert_temperature(32.0, "fahrenheit", "celsius").unwrap(), 0.0);
        assert_eq!(convert_temperature(212.0, "fahrenheit", "celsius").unwrap(), 100.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert_temperature(0.0, "celsius", "kelvin").unwrap(), 273.15);
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert_eq!(convert_temperature(273.15, "kelvin", "celsius").unwrap(), 0.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        assert_eq!(convert_temperature(32.0, "fahrenheit", "kelvin").unwrap(), 273.15);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        assert_eq!(convert_temperature(273.15, "kelvin", "fahrenheit").unwrap(), 32.0);
    }

    #[test]
    fn test_minus_forty_crossover() {
        assert_eq!(convert_temperature(-40.0, "celsius", "fahrenheit").unwrap(), -40.0);
        assert_eq!(convert_temperature(-40.0, "fahrenheit", "celsius").unwrap(), -40.0);
    }

    #[test]
    fn test_same_unit_short_circuit() {
        assert_eq!(convert_temperature(25.456, "celsius", "celsius").unwrap(), 25.46);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            convert_temperature(0.0, "CELSIUS", "Fahrenheit").unwrap(),
            convert_temperature(0.0, "celsius", "fahrenheit").unwrap()
        );
    }

    #[test]
    fn test_invalid_scale_names_side() {
        let err = convert_temperature(0.0, "celsius", "rankine").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid target unit 'rankine'"));
        assert!(message.contains("celsius, fahrenheit, kelvin"));
    }
}
