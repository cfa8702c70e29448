use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, Request, RestClient, RestClientBuilder, RestClientConfig};
use crate::exchanges::binance_options::market_data::OptionsKlinesService;
use serde_json::Value;

/// Binance options (`eapi`) REST client
pub struct BinanceOptionsClient<R: RestClient> {
    rest: R,
}

impl<R: RestClient> BinanceOptionsClient<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    pub fn klines(&self) -> OptionsKlinesService<'_, R> {
        OptionsKlinesService::new(self)
    }

    pub(crate) async fn call(&self, request: &Request) -> Result<Value, ExchangeError> {
        self.rest.invoke_json(request).await
    }
}

/// Create an options client backed by reqwest
pub fn build_options_client(
    config: &ExchangeConfig,
) -> Result<BinanceOptionsClient<ReqwestRest>, ExchangeError> {
    let mut rest_config =
        RestClientConfig::new(config.options_url(), "binance_options".to_string())
            .with_timeout(config.timeout_seconds);
    if let Some(user_agent) = &config.user_agent {
        rest_config = rest_config.with_user_agent(user_agent.clone());
    }

    Ok(BinanceOptionsClient::new(
        RestClientBuilder::new(rest_config).build()?,
    ))
}
