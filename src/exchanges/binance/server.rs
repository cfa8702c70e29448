use crate::core::errors::ExchangeError;
use crate::core::kernel::{Request, RestClient};
use crate::core::params::ParameterSet;
use crate::exchanges::binance::client::BinanceClient;
use crate::exchanges::binance::codec::decode_server_time;
use tracing::{debug, instrument};

pub const PING_ENDPOINT: &str = "/api/v3/ping";
pub const TIME_ENDPOINT: &str = "/api/v3/time";

/// Connectivity check
pub struct PingService<'a, R: RestClient> {
    client: &'a BinanceClient<R>,
}

impl<'a, R: RestClient> PingService<'a, R> {
    pub(crate) fn new(client: &'a BinanceClient<R>) -> Self {
        Self { client }
    }

    pub async fn send(&self) -> Result<(), ExchangeError> {
        let request = Request::get(PING_ENDPOINT, ParameterSet::new());
        self.client.rest().invoke(&request).await.map(|_| ())
    }
}

/// Current exchange server time in milliseconds
pub struct ServerTimeService<'a, R: RestClient> {
    client: &'a BinanceClient<R>,
}

impl<'a, R: RestClient> ServerTimeService<'a, R> {
    pub(crate) fn new(client: &'a BinanceClient<R>) -> Self {
        Self { client }
    }

    pub async fn send(&self) -> Result<i64, ExchangeError> {
        let request = Request::get(TIME_ENDPOINT, ParameterSet::new());
        let payload = self.client.call(&request).await?;
        decode_server_time(&payload)
    }
}

/// Measures and stores the local-vs-server clock offset
///
/// The stored value is only replaced after a successful round trip, so a
/// failed or dropped measurement keeps the previous offset. Concurrent
/// measurements are last-writer-wins.
pub struct ClockOffsetService<'a, R: RestClient> {
    client: &'a BinanceClient<R>,
}

impl<'a, R: RestClient> ClockOffsetService<'a, R> {
    pub(crate) fn new(client: &'a BinanceClient<R>) -> Self {
        Self { client }
    }

    /// Returns `local_now - server_time` in milliseconds, wrapping on overflow
    #[instrument(skip(self))]
    pub async fn measure(&self) -> Result<i64, ExchangeError> {
        let server_time = self.client.server_time().send().await?;
        let offset = self.client.now_millis().wrapping_sub(server_time);
        self.client.store_time_offset(offset);
        debug!(server_time, offset, "time offset updated");
        Ok(offset)
    }
}
