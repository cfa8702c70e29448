use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::binance::client::BinanceClient;

/// Create the reqwest transport for the spot API
pub fn build_rest(config: &ExchangeConfig) -> Result<ReqwestRest, ExchangeError> {
    let mut rest_config = RestClientConfig::new(config.spot_url(), "binance".to_string())
        .with_timeout(config.timeout_seconds);
    if let Some(user_agent) = &config.user_agent {
        rest_config = rest_config.with_user_agent(user_agent.clone());
    }

    RestClientBuilder::new(rest_config).build()
}

/// Create a spot client backed by reqwest
pub fn build_client(config: &ExchangeConfig) -> Result<BinanceClient<ReqwestRest>, ExchangeError> {
    Ok(BinanceClient::new(build_rest(config)?))
}

/// Create a spot client from `{PREFIX}_*` environment variables
pub fn build_client_from_env(
    exchange_prefix: &str,
) -> Result<BinanceClient<ReqwestRest>, ExchangeError> {
    let config = ExchangeConfig::from_env(exchange_prefix)?;
    build_client(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TESTNET_BASE_URL;
    use std::env;

    #[test]
    fn test_build_rest_uses_config() {
        let config = ExchangeConfig::new().testnet(true).timeout_seconds(5);
        let rest = build_rest(&config).unwrap();

        assert_eq!(rest.config().base_url, TESTNET_BASE_URL);
        assert_eq!(rest.config().timeout_seconds, 5);
        assert_eq!(rest.config().exchange_name, "binance");
    }

    #[test]
    fn test_build_client_starts_with_zero_offset() {
        let client = build_client(&ExchangeConfig::new()).unwrap();
        assert_eq!(client.time_offset(), 0);
    }

    #[test]
    fn test_build_client_from_env_reports_config_error() {
        env::set_var("BLDTEST_TIMEOUT_SECONDS", "never");
        let err = build_client_from_env("bldtest").unwrap_err();
        env::remove_var("BLDTEST_TIMEOUT_SECONDS");

        assert!(matches!(err, ExchangeError::ConfigError(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_build_client_from_env_uses_prefixed_vars() {
        env::set_var("BLDENV_TESTNET", "true");
        let client = build_client_from_env("bldenv").unwrap();
        env::remove_var("BLDENV_TESTNET");

        assert_eq!(client.rest().config().base_url, TESTNET_BASE_URL);
    }
}
