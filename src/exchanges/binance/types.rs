use crate::core::types::PriceLevel;
use serde::{Deserialize, Serialize};

/// Spot candlestick decoded from the positional `/api/v3/klines` format.
///
/// Prices and volumes stay as the exchange's decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kline {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: i64,
    pub quote_asset_volume: String,
    pub trade_num: i64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
}

pub type Bid = PriceLevel;
pub type Ask = PriceLevel;

/// Order book snapshot from `/api/v3/depth`.
///
/// `bids` and `asks` keep the exchange's order: best level first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthResponse {
    pub last_update_id: i64,
    pub bids: Vec<Bid>,
    pub asks: Vec<Ask>,
}

impl DepthResponse {
    pub fn best_bid(&self) -> Option<&Bid> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&Ask> {
        self.asks.first()
    }
}
