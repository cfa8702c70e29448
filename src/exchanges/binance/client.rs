use crate::core::clock::{system_clock, Clock, TimeOffset};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{Request, RestClient};
use crate::exchanges::binance::market_data::{DepthService, KlinesService};
use crate::exchanges::binance::server::{ClockOffsetService, PingService, ServerTimeService};
use serde_json::Value;
use std::sync::Arc;

/// Binance spot REST client
///
/// Owns the transport, the local clock and the measured time offset. Endpoint
/// services borrow the client and are built fresh per request.
pub struct BinanceClient<R: RestClient> {
    rest: R,
    clock: Arc<dyn Clock>,
    time_offset: TimeOffset,
}

impl<R: RestClient> BinanceClient<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest,
            clock: system_clock(),
            time_offset: TimeOffset::default(),
        }
    }

    /// Replace the local clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Last measured `local_now - server_time` in milliseconds
    pub fn time_offset(&self) -> i64 {
        self.time_offset.get()
    }

    /// Shared handle to the offset cell, for signers living outside the client
    pub fn time_offset_handle(&self) -> TimeOffset {
        self.time_offset.clone()
    }

    /// Local time corrected by the measured offset
    pub fn server_timestamp(&self) -> i64 {
        self.time_offset.server_time_at(self.clock.now_millis())
    }

    pub fn ping(&self) -> PingService<'_, R> {
        PingService::new(self)
    }

    pub fn server_time(&self) -> ServerTimeService<'_, R> {
        ServerTimeService::new(self)
    }

    pub fn clock_offset(&self) -> ClockOffsetService<'_, R> {
        ClockOffsetService::new(self)
    }

    pub fn klines(&self) -> KlinesService<'_, R> {
        KlinesService::new(self)
    }

    pub fn depth(&self) -> DepthService<'_, R> {
        DepthService::new(self)
    }

    pub(crate) async fn call(&self, request: &Request) -> Result<Value, ExchangeError> {
        self.rest.invoke_json(request).await
    }

    pub(crate) fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub(crate) fn store_time_offset(&self, offset: i64) {
        self.time_offset.set(offset);
    }
}

impl<R: RestClient + std::fmt::Debug> std::fmt::Debug for BinanceClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("rest", &self.rest)
            .field("time_offset", &self.time_offset.get())
            .finish_non_exhaustive()
    }
}
