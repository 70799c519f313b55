//! Currency rate resolution.

use std::sync::Arc;

use tracing::{debug, instrument};
use unitconv_common::{Currency, CurrencyPair};

use crate::cache::SharedRateCache;
use crate::error::{FxError, FxResult};
use crate::provider::RateProvider;

/// Resolves multiplicative rates for ordered currency pairs,
/// consulting the cache before the upstream provider.
///
/// The resolver owns the injected cache; no other component writes it.
pub struct RateResolver {
    provider: Arc<dyn RateProvider>,
    cache: SharedRateCache,
}

impl RateResolver {
    /// Create a resolver around a provider and an injected cache.
    pub fn new(provider: Arc<dyn RateProvider>, cache: SharedRateCache) -> Self {
        Self { provider, cache }
    }

    /// Resolve the rate such that `converted = value * rate`.
    ///
    /// A cached rate is returned as-is, with no freshness check. On a
    /// miss the provider is called once; nothing is cached on failure.
    /// Concurrent misses on the same pair may each reach the provider;
    /// whichever write lands first is the entry the process keeps, and
    /// that entry is what every caller gets back.
    #[instrument(skip(self), fields(from = %from, to = %to))]
    pub async fn resolve(&self, from: &Currency, to: &Currency) -> FxResult<f64> {
        let pair = CurrencyPair::new(from.clone(), to.clone());

        if let Some(rate) = self.cache.get(&pair) {
            return Ok(rate);
        }

        let sheet = self.provider.latest_rates(&pair.base).await?;
        let rate = sheet
            .rate_for(&pair.quote)
            .ok_or_else(|| FxError::UnknownTargetCurrency {
                base: pair.base.clone(),
                target: pair.quote.clone(),
            })?;

        let kept = self.cache.insert(pair, rate);
        debug!(provider = self.provider.name(), rate = kept, "Resolved rate");
        Ok(kept)
    }

    /// The cache this resolver writes to.
    pub fn cache(&self) -> &SharedRateCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RateCache;
    use crate::provider::MockRateProvider;
    use std::time::Duration;

    fn setup(provider: MockRateProvider) -> (Arc<MockRateProvider>, RateResolver) {
        let provider = Arc::new(provider);
        let resolver = RateResolver::new(provider.clone(), Arc::new(RateCache::new()));
        (provider, resolver)
    }

    #[tokio::test]
    async fn test_resolves_from_provider() {
        let mock = MockRateProvider::new("test");
        mock.set_rate("USD", "EUR", 0.92);
        let (_, resolver) = setup(mock);

        let rate = resolver
            .resolve(&Currency::new("USD"), &Currency::new("EUR"))
            .await
            .unwrap();

        assert_eq!(rate, 0.92);
    }

    #[tokio::test]
    async fn test_second_resolution_hits_cache() {
        let mock = MockRateProvider::new("test");
        mock.set_rate("USD", "EUR", 0.92);
        let (provider, resolver) = setup(mock);

        let usd = Currency::new("USD");
        let eur = Currency::new("EUR");
        resolver.resolve(&usd, &eur).await.unwrap();
        let rate = resolver.resolve(&usd, &eur).await.unwrap();

        assert_eq!(rate, 0.92);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_codes_normalized_to_upper_case() {
        let mock = MockRateProvider::new("test");
        mock.set_rate("USD", "EUR", 0.92);
        let (provider, resolver) = setup(mock);

        resolver
            .resolve(&Currency::new("usd"), &Currency::new("eur"))
            .await
            .unwrap();
        resolver
            .resolve(&Currency::new("USD"), &Currency::new("EUR"))
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_target_not_cached() {
        let mock = MockRateProvider::new("test");
        mock.set_rate("USD", "EUR", 0.92);
        let (_, resolver) = setup(mock);

        let usd = Currency::new("USD");
        let xxx = Currency::new("XXX");
        let result = resolver.resolve(&usd, &xxx).await;

        assert!(matches!(
            result,
            Err(FxError::UnknownTargetCurrency { .. })
        ));
        assert!(resolver.cache().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_not_cached() {
        let (_, resolver) = setup(MockRateProvider::new("test"));

        let result = resolver
            .resolve(&Currency::new("USD"), &Currency::new("EUR"))
            .await;

        assert!(matches!(result, Err(FxError::ProviderUnreachable(_))));
        assert!(resolver.cache().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_misses_leave_one_entry() {
        let mock = MockRateProvider::new("test").with_delay(Duration::from_millis(50));
        mock.set_rate("USD", "EUR", 0.92);
        let (provider, resolver) = setup(mock);
        let resolver = Arc::new(resolver);

        let a = {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                resolver
                    .resolve(&Currency::new("USD"), &Currency::new("EUR"))
                    .await
            })
        };
        let b = {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                resolver
                    .resolve(&Currency::new("USD"), &Currency::new("EUR"))
                    .await
            })
        };

        let rate_a = a.await.unwrap().unwrap();
        let rate_b = b.await.unwrap().unwrap();

        assert_eq!(rate_a, 0.92);
        assert_eq!(rate_b, 0.92);
        // Duplicate in-flight calls are tolerated, but the cache ends
        // with exactly one entry for the pair.
        assert!(provider.call_count() >= 1 && provider.call_count() <= 2);
        assert_eq!(resolver.cache().len(), 1);
    }
}
