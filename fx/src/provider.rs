//! Rate provider trait and implementations.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use unitconv_common::Currency;

use crate::error::{FxError, FxResult};

/// A provider's rate sheet for a single base currency.
///
/// Rates are multiplicative: `converted = value * rate`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSheet {
    /// Rates relative to the requested base, keyed by currency code.
    pub rates: HashMap<String, f64>,
}

impl RateSheet {
    /// Look up the multiplier for a target currency.
    pub fn rate_for(&self, target: &Currency) -> Option<f64> {
        self.rates.get(target.code()).copied()
    }
}

/// Trait for upstream exchange-rate providers.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Fetch the latest rate sheet for a base currency.
    async fn latest_rates(&self, base: &Currency) -> FxResult<RateSheet>;
}

/// Provider backed by an exchangerate-api style HTTP endpoint.
///
/// Issues `GET <base_url>/<BASE>` and expects a JSON body carrying a
/// `rates` object of code -> multiplier. Any non-2xx status or
/// transport failure surfaces as `ProviderUnreachable`; a body that
/// does not carry a `rates` object surfaces as `ProviderFormat`.
pub struct HttpRateProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRateProvider {
    /// Create a provider with a bounded per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::ProviderUnreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> FxError {
        if e.is_timeout() {
            FxError::Timeout {
                timeout: self.timeout,
            }
        } else {
            FxError::ProviderUnreachable(e.to_string())
        }
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn latest_rates(&self, base: &Currency) -> FxResult<RateSheet> {
        let url = format!("{}/{}", self.base_url, base.code());
        debug!(%url, "Fetching rate sheet");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::ProviderUnreachable(format!(
                "provider returned {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_slice(&body).map_err(|e| FxError::ProviderFormat(e.to_string()))
    }
}

/// Mock rate provider for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    sheets: dashmap::DashMap<Currency, HashMap<String, f64>>,
    calls: std::sync::atomic::AtomicUsize,
    delay: Option<Duration>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Create a new mock provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheets: dashmap::DashMap::new(),
            calls: std::sync::atomic::AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Delay every provider call, to hold concurrent misses in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the rate returned for a base/target pair.
    pub fn set_rate(&self, base: &str, target: &str, rate: f64) {
        self.sheets
            .entry(Currency::new(base))
            .or_insert_with(HashMap::new)
            .insert(target.to_uppercase(), rate);
    }

    /// Number of `latest_rates` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn latest_rates(&self, base: &Currency) -> FxResult<RateSheet> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.sheets
            .get(base)
            .map(|rates| RateSheet {
                rates: rates.clone(),
            })
            .ok_or_else(|| FxError::ProviderUnreachable(format!("no rate sheet for {base}")))
    }
}
