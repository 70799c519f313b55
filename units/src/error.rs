//! Unit validation error types.

use std::fmt;
use thiserror::Error;

/// Which side of a conversion request an invalid unit appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSide {
    Source,
    Target,
}

impl fmt::Display for UnitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSide::Source => write!(f, "source"),
            UnitSide::Target => write!(f, "target"),
        }
    }
}

/// Errors from unit validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The unit is not a member of the supported set for its kind.
    /// `supported` lists the full set in declaration order.
    #[error("Invalid {side} unit '{unit}'. Supported: {}", .supported.join(", "))]
    Invalid {
        side: UnitSide,
        unit: String,
        supported: Vec<&'static str>,
    },
}

/// Result type for unit conversions.
pub type UnitResult<T> = Result<T, UnitError>;
