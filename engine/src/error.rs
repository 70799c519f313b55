//! Conversion error taxonomy.

use thiserror::Error;
use unitconv_fx::FxError;
use unitconv_units::UnitError;

/// Failure of a single conversion request.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A unit failed membership validation.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// The currency path failed.
    #[error(transparent)]
    Fx(#[from] FxError),
}

impl ConvertError {
    /// Whether the caller supplied bad input, as opposed to a
    /// dependency failing. The HTTP layer uses this for the
    /// client-error vs server-error status split.
    pub fn is_client_fault(&self) -> bool {
        match self {
            ConvertError::Unit(_) => true,
            ConvertError::Fx(FxError::UnknownTargetCurrency { .. }) => true,
            ConvertError::Fx(_) => false,
        }
    }
}

/// Result type for conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
