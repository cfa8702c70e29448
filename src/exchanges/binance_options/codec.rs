use crate::core::errors::ExchangeError;
use crate::core::json::JsonNode;
use crate::exchanges::binance_options::types::OptionsKline;
use serde_json::{Map, Value};

/// Minimum keys in an options kline object
pub const KLINE_FIELDS: usize = 12;

/// Decode an `/eapi/v1/klines` payload: an array of objects
///
/// An element with fewer than [`KLINE_FIELDS`] keys fails the whole call.
/// Fields that are present but of the wrong JSON type decode to `0` / `""`.
pub fn decode_klines(payload: &Value) -> Result<Vec<OptionsKline>, ExchangeError> {
    let rows = JsonNode::new(payload).array().unwrap_or_default();
    let mut klines = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let item = JsonNode::new(row);
        let found = item.map().map_or(0, Map::len);
        if found < KLINE_FIELDS {
            return Err(ExchangeError::InvalidResponseShape {
                record: "options kline",
                index,
                found,
                expected: KLINE_FIELDS,
            });
        }

        klines.push(OptionsKline {
            open_time: item.get("openTime").int64_or_default(),
            open: item.get("open").string_or_default(),
            high: item.get("high").string_or_default(),
            low: item.get("low").string_or_default(),
            close: item.get("close").string_or_default(),
            close_time: item.get("closeTime").int64_or_default(),
            amount: item.get("amount").string_or_default(),
            taker_amount: item.get("takerAmount").string_or_default(),
            volume: item.get("volume").string_or_default(),
            taker_volume: item.get("takerVolume").string_or_default(),
            interval: item.get("interval").string_or_default(),
            trade_count: item.get("tradeCount").int64_or_default(),
        });
    }

    Ok(klines)
}
