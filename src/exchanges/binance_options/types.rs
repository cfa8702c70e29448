use serde::{Deserialize, Serialize};

/// Options candlestick decoded from the keyed `/eapi/v1/klines` format.
///
/// Unlike the spot kline this carries its interval tag and reports
/// amount/taker amount instead of quote asset volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsKline {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub close_time: i64,
    pub amount: String,
    pub taker_amount: String,
    pub volume: String,
    pub taker_volume: String,
    pub interval: String,
    pub trade_count: i64,
}
