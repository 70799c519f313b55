//! Process-lifetime rate cache.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use unitconv_common::CurrencyPair;

/// Thread-safe cache of resolved rates, keyed by ordered currency pair.
///
/// Entries are never expired or invalidated: once a pair resolves, its
/// rate is frozen for the life of the process even if the upstream
/// rate moves. A TTL policy would slot in behind this type if intraday
/// movement ever needs to be picked up.
pub struct RateCache {
    rates: DashMap<CurrencyPair, f64>,
}

impl RateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            rates: DashMap::new(),
        }
    }

    /// Get the cached rate for a pair, if any. No freshness check.
    pub fn get(&self, pair: &CurrencyPair) -> Option<f64> {
        let hit = self.rates.get(pair).map(|rate| *rate);
        match hit {
            Some(rate) => debug!(pair = %pair, rate, "Cache hit"),
            None => debug!(pair = %pair, "Cache miss"),
        }
        hit
    }

    /// Insert a rate for a pair and return the entry the cache keeps.
    ///
    /// The first writer wins: a concurrent insert for the same pair
    /// leaves the existing entry in place.
    pub fn insert(&self, pair: CurrencyPair, rate: f64) -> f64 {
        *self.rates.entry(pair).or_insert(rate)
    }

    /// Whether the pair has a cached rate.
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.rates.contains_key(pair)
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared rate cache.
pub type SharedRateCache = Arc<RateCache>;

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_common::Currency;

    fn pair(base: &str, quote: &str) -> CurrencyPair {
        CurrencyPair::new(Currency::new(base), Currency::new(quote))
    }

    #[test]
    fn test_insert_and_get() {
        let cache = RateCache::new();
        cache.insert(pair("USD", "EUR"), 0.92);

        assert_eq!(cache.get(&pair("USD", "EUR")), Some(0.92));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss() {
        let cache = RateCache::new();
        assert_eq!(cache.get(&pair("USD", "EUR")), None);
    }

    #[test]
    fn test_reverse_pair_is_distinct() {
        let cache = RateCache::new();
        cache.insert(pair("USD", "EUR"), 0.92);

        assert_eq!(cache.get(&pair("EUR", "USD")), None);
    }

    #[test]
    fn test_first_writer_wins() {
        let cache = RateCache::new();
        assert_eq!(cache.insert(pair("USD", "EUR"), 0.92), 0.92);
        assert_eq!(cache.insert(pair("USD", "EUR"), 0.95), 0.92);

        assert_eq!(cache.get(&pair("USD", "EUR")), Some(0.92));
        assert_eq!(cache.len(), 1);
    }
}
