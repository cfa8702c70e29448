//! Property tests for the response decoders.

use binance_rest::core::errors::ExchangeError;
use binance_rest::exchanges::binance::{decode_depth, decode_klines, Kline};
use binance_rest::exchanges::binance_options::{self, OptionsKline};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Generators
// ============================================================================

fn decimal_string() -> impl Strategy<Value = String> {
    (0u64..1_000_000, 0u32..100_000_000).prop_map(|(int, frac)| format!("{}.{:08}", int, frac))
}

fn level_strategy() -> impl Strategy<Value = (String, String)> {
    (decimal_string(), decimal_string())
}

fn kline_strategy() -> impl Strategy<Value = Kline> {
    (
        (0i64..4_000_000_000_000, 1i64..86_400_000),
        prop::collection::vec(decimal_string(), 8),
        0i64..1_000_000,
    )
        .prop_map(|((open_time, span), s, trades)| Kline {
            open_time,
            open: s[0].clone(),
            high: s[1].clone(),
            low: s[2].clone(),
            close: s[3].clone(),
            volume: s[4].clone(),
            close_time: open_time + span,
            quote_asset_volume: s[5].clone(),
            trade_num: trades,
            taker_buy_base_asset_volume: s[6].clone(),
            taker_buy_quote_asset_volume: s[7].clone(),
        })
}

fn options_kline_strategy() -> impl Strategy<Value = OptionsKline> {
    (
        (0i64..4_000_000_000_000, 1i64..86_400_000),
        prop::collection::vec(decimal_string(), 8),
        prop::sample::select(vec!["1m", "5m", "1h", "1d"]),
        0i64..1_000_000,
    )
        .prop_map(|((open_time, span), s, interval, trades)| OptionsKline {
            open_time,
            open: s[0].clone(),
            high: s[1].clone(),
            low: s[2].clone(),
            close: s[3].clone(),
            close_time: open_time + span,
            amount: s[4].clone(),
            taker_amount: s[5].clone(),
            volume: s[6].clone(),
            taker_volume: s[7].clone(),
            interval: interval.to_string(),
            trade_count: trades,
        })
}

fn positional_row(k: &Kline) -> Value {
    json!([
        k.open_time,
        k.open,
        k.high,
        k.low,
        k.close,
        k.volume,
        k.close_time,
        k.quote_asset_volume,
        k.trade_num,
        k.taker_buy_base_asset_volume,
        k.taker_buy_quote_asset_volume,
        "0"
    ])
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Depth levels come back in exactly the order they were sent.
    #[test]
    fn prop_depth_preserves_level_order(
        bids in prop::collection::vec(level_strategy(), 0..50),
        asks in prop::collection::vec(level_strategy(), 0..50),
        last_update_id in any::<i64>()
    ) {
        let payload = json!({
            "lastUpdateId": last_update_id,
            "bids": bids.iter().map(|(p, q)| json!([p, q])).collect::<Vec<_>>(),
            "asks": asks.iter().map(|(p, q)| json!([p, q])).collect::<Vec<_>>(),
        });

        let depth = decode_depth(&payload);

        prop_assert_eq!(depth.last_update_id, last_update_id);
        let got_bids: Vec<(String, String)> =
            depth.bids.into_iter().map(|l| (l.price, l.quantity)).collect();
        let got_asks: Vec<(String, String)> =
            depth.asks.into_iter().map(|l| (l.price, l.quantity)).collect();
        prop_assert_eq!(got_bids, bids);
        prop_assert_eq!(got_asks, asks);
    }

    /// Well-formed positional rows decode one-to-one, in order, to the same values.
    #[test]
    fn prop_positional_klines_round_trip(klines in prop::collection::vec(kline_strategy(), 0..20)) {
        let payload = Value::Array(klines.iter().map(positional_row).collect());

        let decoded = decode_klines(&payload).unwrap();

        prop_assert_eq!(decoded, klines);
    }

    /// Serialising keyed rows with the record's own serde names and decoding
    /// them gives the same records back.
    #[test]
    fn prop_keyed_klines_round_trip(klines in prop::collection::vec(options_kline_strategy(), 0..20)) {
        let payload = serde_json::to_value(&klines).unwrap();

        let decoded = binance_options::decode_klines(&payload).unwrap();

        prop_assert_eq!(decoded, klines);
    }

    /// A single short row anywhere in the batch fails the whole decode.
    #[test]
    fn prop_short_positional_row_fails_batch(
        klines in prop::collection::vec(kline_strategy(), 1..10),
        position in any::<prop::sample::Index>(),
        keep in 0usize..11
    ) {
        let mut rows: Vec<Value> = klines.iter().map(positional_row).collect();
        let bad = position.index(rows.len());
        if let Value::Array(fields) = &mut rows[bad] {
            fields.truncate(keep);
        }

        let result = decode_klines(&Value::Array(rows));

        match result {
            Err(ExchangeError::InvalidResponseShape { index, found, expected, .. }) => {
                prop_assert_eq!(index, bad);
                prop_assert_eq!(found, keep);
                prop_assert_eq!(expected, 11);
            }
            other => prop_assert!(false, "expected shape error, got {:?}", other),
        }
    }

    /// Same atomicity for the keyed shape: dropping keys below twelve fails the batch.
    #[test]
    fn prop_short_keyed_row_fails_batch(
        klines in prop::collection::vec(options_kline_strategy(), 1..10),
        position in any::<prop::sample::Index>(),
        drop in 1usize..12
    ) {
        let mut rows: Vec<Value> = klines
            .iter()
            .map(|k| serde_json::to_value(k).unwrap())
            .collect();
        let bad = position.index(rows.len());
        if let Value::Object(map) = &mut rows[bad] {
            let keys: Vec<String> = map.keys().take(drop).cloned().collect();
            for key in keys {
                map.remove(&key);
            }
        }

        let result = binance_options::decode_klines(&Value::Array(rows));

        prop_assert!(
            matches!(result, Err(ExchangeError::InvalidResponseShape { index, .. }) if index == bad),
            "unexpected result: {:?}",
            result
        );
    }
}
