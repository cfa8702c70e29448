use crate::core::errors::ExchangeError;
use crate::core::kernel::{Request, RestClient};
use crate::core::params::ParameterSet;
use crate::exchanges::binance::client::BinanceClient;
use crate::exchanges::binance::codec::{decode_depth, decode_klines};
use crate::exchanges::binance::types::{DepthResponse, Kline};
use tracing::instrument;

pub const KLINES_ENDPOINT: &str = "/api/v3/klines";
pub const DEPTH_ENDPOINT: &str = "/api/v3/depth";

/// Spot candlesticks
///
/// `symbol` and `interval` are always sent, even when empty; the exchange
/// rejects a missing one. The rest are sent only when set.
pub struct KlinesService<'a, R: RestClient> {
    client: &'a BinanceClient<R>,
    symbol: String,
    interval: String,
    limit: Option<u32>,
    start_time: Option<i64>,
    end_time: Option<i64>,
}

impl<'a, R: RestClient> KlinesService<'a, R> {
    pub(crate) fn new(client: &'a BinanceClient<R>) -> Self {
        Self {
            client,
            symbol: String::new(),
            interval: String::new(),
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Accepts a wire string ("1m") or a `KlineInterval`
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn build(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.set("symbol", self.symbol.as_str());
        params.set("interval", self.interval.as_str());
        params.set_opt("limit", self.limit);
        params.set_opt("startTime", self.start_time);
        params.set_opt("endTime", self.end_time);
        params
    }

    pub fn request(&self) -> Request {
        Request::get(KLINES_ENDPOINT, self.build())
    }

    #[instrument(skip(self), fields(symbol = %self.symbol, interval = %self.interval))]
    pub async fn send(&self) -> Result<Vec<Kline>, ExchangeError> {
        let payload = self.client.call(&self.request()).await?;
        decode_klines(&payload)
    }
}

/// Spot order book snapshot
pub struct DepthService<'a, R: RestClient> {
    client: &'a BinanceClient<R>,
    symbol: String,
    limit: Option<u32>,
}

impl<'a, R: RestClient> DepthService<'a, R> {
    pub(crate) fn new(client: &'a BinanceClient<R>) -> Self {
        Self {
            client,
            symbol: String::new(),
            limit: None,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.set("symbol", self.symbol.as_str());
        params.set_opt("limit", self.limit);
        params
    }

    pub fn request(&self) -> Request {
        Request::get(DEPTH_ENDPOINT, self.build())
    }

    #[instrument(skip(self), fields(symbol = %self.symbol))]
    pub async fn send(&self) -> Result<DepthResponse, ExchangeError> {
        let payload = self.client.call(&self.request()).await?;
        Ok(decode_depth(&payload))
    }
}
