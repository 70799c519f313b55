//! Gateway configuration.

use std::time::Duration;

/// Main gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address.
    pub listen_addr: String,
    /// Listen port.
    pub listen_port: u16,
    /// Base URL of the exchange-rate provider.
    pub currency_api_url: String,
    /// Timeout for provider calls.
    pub currency_api_timeout: Duration,
    /// Log level.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".to_string(),
            listen_port: 8000,
            currency_api_url: "https://api.exchangerate-api.com/v4/latest".to_string(),
            currency_api_timeout: Duration::from_secs(5),
            log_level: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("GATEWAY_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(port) = std::env::var("GATEWAY_LISTEN_PORT") {
            if let Ok(port) = port.parse() {
                config.listen_port = port;
            }
        }

        if let Ok(url) = std::env::var("CURRENCY_API_URL") {
            config.currency_api_url = url;
        }

        if let Ok(secs) = std::env::var("CURRENCY_API_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.currency_api_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_port == 0 {
            return Err("Listen port cannot be 0".to_string());
        }

        if self.currency_api_url.is_empty() {
            return Err("Currency API URL cannot be empty".to_string());
        }

        if self.currency_api_timeout.is_zero() {
            return Err("Currency API timeout cannot be zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_api_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_port_is_invalid() {
        let mut config = GatewayConfig::default();
        config.listen_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_provider_url_is_invalid() {
        let mut config = GatewayConfig::default();
        config.currency_api_url.clear();
        assert!(config.validate().is_err());
    }

    // Single test for all env handling: these vars are process-wide,
    // so splitting this up would race under the parallel test runner.
    #[test]
    fn test_env_overrides() {
        std::env::set_var("GATEWAY_LISTEN_ADDR", "127.0.0.1");
        std::env::set_var("GATEWAY_LISTEN_PORT", "9100");
        std::env::set_var("CURRENCY_API_URL", "http://rates.internal/v4/latest");
        std::env::set_var("CURRENCY_API_TIMEOUT_SECS", "2");

        let config = GatewayConfig::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1");
        assert_eq!(config.listen_port, 9100);
        assert_eq!(config.currency_api_url, "http://rates.internal/v4/latest");
        assert_eq!(config.currency_api_timeout, Duration::from_secs(2));

        // An unparseable port keeps the default.
        std::env::set_var("GATEWAY_LISTEN_PORT", "not-a-port");
        let config = GatewayConfig::from_env();
        assert_eq!(config.listen_port, GatewayConfig::default().listen_port);

        std::env::remove_var("GATEWAY_LISTEN_ADDR");
        std::env::remove_var("GATEWAY_LISTEN_PORT");
        std::env::remove_var("CURRENCY_API_URL");
        std::env::remove_var("CURRENCY_API_TIMEOUT_SECS");
    }
}
