//! FX resolution error types.

use std::time::Duration;

use thiserror::Error;
use unitconv_common::Currency;

/// Errors that can occur while resolving a currency rate.
///
/// All variants are terminal for the current request; there are no
/// internal retries and no fallback provider.
#[derive(Debug, Error)]
pub enum FxError {
    /// Provider did not respond within the configured bound.
    #[error("Currency provider timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Transport failure or non-success status from the provider.
    #[error("Currency provider unreachable: {0}")]
    ProviderUnreachable(String),

    /// Response body was malformed or missing the rates collection.
    #[error("Invalid provider response: {0}")]
    ProviderFormat(String),

    /// Target code absent from the provider's rate set for the base.
    #[error("Currency '{target}' not found in exchange rates for {base}")]
    UnknownTargetCurrency { base: Currency, target: Currency },
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
