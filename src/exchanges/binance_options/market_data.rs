use crate::core::errors::ExchangeError;
use crate::core::kernel::{Request, RestClient};
use crate::core::params::ParameterSet;
use crate::exchanges::binance_options::client::BinanceOptionsClient;
use crate::exchanges::binance_options::codec::decode_klines;
use crate::exchanges::binance_options::types::OptionsKline;
use tracing::instrument;

pub const KLINES_ENDPOINT: &str = "/eapi/v1/klines";

/// Options candlesticks
pub struct OptionsKlinesService<'a, R: RestClient> {
    client: &'a BinanceOptionsClient<R>,
    symbol: String,
    interval: String,
    limit: Option<u32>,
    start_time: Option<i64>,
    end_time: Option<i64>,
}

impl<'a, R: RestClient> OptionsKlinesService<'a, R> {
    pub(crate) fn new(client: &'a BinanceOptionsClient<R>) -> Self {
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
    pub async fn send(&self) -> Result<Vec<OptionsKline>, ExchangeError> {
        let payload = self.client.call(&self.request()).await?;
        decode_klines(&payload)
    }
}
