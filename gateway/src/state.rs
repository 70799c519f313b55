//! Shared application state.

use std::sync::Arc;

use unitconv_engine::Dispatcher;
use unitconv_fx::{FxResult, HttpRateProvider, RateCache, RateResolver};

use crate::config::GatewayConfig;
use crate::metrics::{Metrics, SharedMetrics};

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    dispatcher: Dispatcher,
    metrics: SharedMetrics,
    config: GatewayConfig,
}

impl AppState {
    /// Wire the dispatcher against the live HTTP rate provider.
    pub fn new(config: GatewayConfig) -> FxResult<Self> {
        let provider = HttpRateProvider::new(
            config.currency_api_url.clone(),
            config.currency_api_timeout,
        )?;
        let resolver = RateResolver::new(Arc::new(provider), Arc::new(RateCache::new()));

        Ok(Self::with_dispatcher(config, Dispatcher::new(Arc::new(resolver))))
    }

    /// Build state around an already-constructed dispatcher. Tests
    /// inject a mock provider through here.
    pub fn with_dispatcher(config: GatewayConfig, dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Inner {
                dispatcher,
                metrics: Arc::new(Metrics::new()),
                config,
            }),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }

    pub fn metrics(&self) -> &Metrics {
        self.inner.metrics.as_ref()
    }

    /// Handle to the metrics shared with this state.
    pub fn shared_metrics(&self) -> SharedMetrics {
        self.inner.metrics.clone()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }
}
