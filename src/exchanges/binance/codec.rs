//! Decoders for Binance spot REST payloads.
//!
//! Shape checks are strict: a kline element with too few fields fails the
//! whole call and nothing decoded so far is returned. Scalar conversions are
//! lenient: a field that is not the expected JSON type decodes to `0` or `""`.

use crate::core::errors::ExchangeError;
use crate::core::json::JsonNode;
use crate::core::types::PriceLevel;
use crate::exchanges::binance::types::{DepthResponse, Kline};
use serde_json::Value;

/// Minimum positional fields in a spot kline row
pub const KLINE_FIELDS: usize = 11;

/// Decode a `/api/v3/klines` payload: an array of positional arrays
///
/// `[openTime, open, high, low, close, volume, closeTime, quoteAssetVolume,
/// trades, takerBuyBaseAssetVolume, takerBuyQuoteAssetVolume, ...]`
pub fn decode_klines(payload: &Value) -> Result<Vec<Kline>, ExchangeError> {
    let rows = JsonNode::new(payload).array().unwrap_or_default();
    let mut klines = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let item = JsonNode::new(row);
        let found = item.array().map_or(0, <[Value]>::len);
        if found < KLINE_FIELDS {
            return Err(ExchangeError::InvalidResponseShape {
                record: "kline",
                index,
                found,
                expected: KLINE_FIELDS,
            });
        }

        klines.push(Kline {
            open_time: item.index(0).int64_or_default(),
            open: item.index(1).string_or_default(),
            high: item.index(2).string_or_default(),
            low: item.index(3).string_or_default(),
            close: item.index(4).string_or_default(),
            volume: item.index(5).string_or_default(),
            close_time: item.index(6).int64_or_default(),
            quote_asset_volume: item.index(7).string_or_default(),
            trade_num: item.index(8).int64_or_default(),
            taker_buy_base_asset_volume: item.index(9).string_or_default(),
            taker_buy_quote_asset_volume: item.index(10).string_or_default(),
        });
    }

    Ok(klines)
}

/// Decode a `/api/v3/depth` payload
///
/// Each level takes positions 0 and 1 as price and quantity. Levels are
/// neither sorted nor deduplicated.
pub fn decode_depth(payload: &Value) -> DepthResponse {
    let root = JsonNode::new(payload);
    DepthResponse {
        last_update_id: root.get("lastUpdateId").int64_or_default(),
        bids: decode_levels(root.get("bids")),
        asks: decode_levels(root.get("asks")),
    }
}

fn decode_levels(side: JsonNode<'_>) -> Vec<PriceLevel> {
    side.array()
        .unwrap_or_default()
        .iter()
        .map(|level| {
            let level = JsonNode::new(level);
            PriceLevel {
                price: level.index(0).string_or_default(),
                quantity: level.index(1).string_or_default(),
            }
        })
        .collect()
}

/// Extract the server time from `/api/v3/time`
///
/// Accepts `{"serverTime": <ms>}` and, failing that, a bare integer body.
pub fn decode_server_time(payload: &Value) -> Result<i64, ExchangeError> {
    let root = JsonNode::new(payload);
    root.get("serverTime").int64().or_else(|_| root.int64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kline_row(open_time: i64) -> Value {
        json!([
            open_time,
            "1.0",
            "2.0",
            "0.5",
            "1.5",
            "10",
            open_time + 59_999,
            "15.0",
            42,
            "5.0",
            "7.5",
            "0"
        ])
    }

    #[test]
    fn test_decode_kline_row() {
        let payload = json!([[
            1_600_000_000_000_i64,
            "1.0",
            "2.0",
            "0.5",
            "1.5",
            "10",
            1_600_000_059_999_i64,
            "15.0",
            42,
            "5.0",
            "7.5"
        ]]);

        let klines = decode_klines(&payload).unwrap();
        assert_eq!(klines.len(), 1);
        let k = &klines[0];
        assert_eq!(k.open_time, 1_600_000_000_000);
        assert_eq!(k.close_time, 1_600_000_059_999);
        assert_eq!(k.trade_num, 42);
        assert_eq!(k.open, "1.0");
        assert_eq!(k.high, "2.0");
        assert_eq!(k.low, "0.5");
        assert_eq!(k.close, "1.5");
        assert_eq!(k.volume, "10");
        assert_eq!(k.quote_asset_volume, "15.0");
        assert_eq!(k.taker_buy_base_asset_volume, "5.0");
        assert_eq!(k.taker_buy_quote_asset_volume, "7.5");
    }

    #[test]
    fn test_short_row_fails_whole_batch() {
        let mut rows: Vec<Value> = (0..5).map(|i| kline_row(i * 60_000)).collect();
        rows[1] = json!([0, "1", "1", "1", "1", "1", 0, "1", 1, "1"]);

        match decode_klines(&Value::Array(rows)) {
            Err(ExchangeError::InvalidResponseShape {
                record,
                index,
                found,
                expected,
            }) => {
                assert_eq!(record, "kline");
                assert_eq!(index, 1);
                assert_eq!(found, 10);
                assert_eq!(expected, KLINE_FIELDS);
            }
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_array_row_is_shape_error() {
        let payload = json!([{"openTime": 1}]);
        assert!(matches!(
            decode_klines(&payload),
            Err(ExchangeError::InvalidResponseShape { found: 0, .. })
        ));
    }

    #[test]
    fn test_scalar_mismatch_is_lenient() {
        // numeric price and string trade count
        let payload = json!([[
            "1600000000000",
            1.0,
            "2.0",
            "0.5",
            "1.5",
            "10",
            1_600_000_059_999_i64,
            "15.0",
            "42",
            "5.0",
            null
        ]]);

        let klines = decode_klines(&payload).unwrap();
        let k = &klines[0];
        assert_eq!(k.open_time, 0);
        assert_eq!(k.open, "");
        assert_eq!(k.high, "2.0");
        assert_eq!(k.trade_num, 0);
        assert_eq!(k.taker_buy_quote_asset_volume, "");
        assert_eq!(k.close_time, 1_600_000_059_999);
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(decode_klines(&json!({"code": 0})).unwrap().is_empty());
        assert!(decode_klines(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_decode_depth_scenario() {
        let payload = json!({
            "lastUpdateId": 42,
            "bids": [["100.5", "2"], ["100.0", "1"]],
            "asks": [["101.0", "3"]]
        });

        let depth = decode_depth(&payload);
        assert_eq!(depth.last_update_id, 42);
        assert_eq!(
            depth.bids,
            vec![PriceLevel::new("100.5", "2"), PriceLevel::new("100.0", "1")]
        );
        assert_eq!(depth.asks, vec![PriceLevel::new("101.0", "3")]);
        assert_eq!(depth.best_bid().unwrap().price, "100.5");
    }

    #[test]
    fn test_decode_depth_keeps_unsorted_order_and_duplicates() {
        let payload = json!({
            "lastUpdateId": 7,
            "bids": [["99", "1"], ["101", "1"], ["99", "1"]],
            "asks": []
        });

        let depth = decode_depth(&payload);
        let prices: Vec<&str> = depth.bids.iter().map(|l| l.price.as_str()).collect();
        assert_eq!(prices, vec!["99", "101", "99"]);
        assert!(depth.asks.is_empty());
    }

    #[test]
    fn test_decode_depth_lenient_levels() {
        let payload = json!({
            "lastUpdateId": "42",
            "bids": [["100.5"], [100.0, "1"], []],
        });

        let depth = decode_depth(&payload);
        assert_eq!(depth.last_update_id, 0);
        assert_eq!(depth.bids.len(), 3);
        assert_eq!(depth.bids[0], PriceLevel::new("100.5", ""));
        assert_eq!(depth.bids[1], PriceLevel::new("", "1"));
        assert_eq!(depth.bids[2], PriceLevel::default());
        assert!(depth.asks.is_empty());
    }

    #[test]
    fn test_decode_server_time_shapes() {
        assert_eq!(decode_server_time(&json!({"serverTime": 1000})).unwrap(), 1000);
        assert_eq!(decode_server_time(&json!(1000)).unwrap(), 1000);
        assert!(decode_server_time(&json!({"serverTime": "1000"})).is_err());
        assert!(decode_server_time(&json!({})).is_err());
    }
}
