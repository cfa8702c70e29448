use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypesError {
    #[error("Invalid price: {0}")]
    InvalidPrice(rust_decimal::Error),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(rust_decimal::Error),
}

/// One order book level as sent by the exchange.
///
/// Both sides stay as strings so no precision is lost in transit; call
/// [`PriceLevel::parse`] when numeric values are needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: String,
    pub quantity: String,
}

impl PriceLevel {
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Parse price and quantity as exact decimals
    pub fn parse(&self) -> Result<(Decimal, Decimal), TypesError> {
        let price = self
            .price
            .parse::<Decimal>()
            .map_err(TypesError::InvalidPrice)?;
        let quantity = self
            .quantity
            .parse::<Decimal>()
            .map_err(TypesError::InvalidQuantity)?;
        Ok((price, quantity))
    }
}

/// Candlestick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    Seconds1,

    Minutes1,
    Minutes3,
    Minutes5,
    Minutes15,
    Minutes30,

    Hours1,
    Hours2,
    Hours4,
    Hours6,
    Hours8,
    Hours12,

    Days1,
    Days3,

    Weeks1,

    Months1,
}

impl KlineInterval {
    /// Binance wire format (e.g., "1m", "1h", "1d")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds1 => "1s",
            Self::Minutes1 => "1m",
            Self::Minutes3 => "3m",
            Self::Minutes5 => "5m",
            Self::Minutes15 => "15m",
            Self::Minutes30 => "30m",
            Self::Hours1 => "1h",
            Self::Hours2 => "2h",
            Self::Hours4 => "4h",
            Self::Hours6 => "6h",
            Self::Hours8 => "8h",
            Self::Hours12 => "12h",
            Self::Days1 => "1d",
            Self::Days3 => "3d",
            Self::Weeks1 => "1w",
            Self::Months1 => "1M",
        }
    }

    /// Get all supported intervals
    pub fn all() -> Vec<Self> {
        vec![
            Self::Seconds1,
            Self::Minutes1,
            Self::Minutes3,
            Self::Minutes5,
            Self::Minutes15,
            Self::Minutes30,
            Self::Hours1,
            Self::Hours2,
            Self::Hours4,
            Self::Hours6,
            Self::Hours8,
            Self::Hours12,
            Self::Days1,
            Self::Days3,
            Self::Weeks1,
            Self::Months1,
        ]
    }
}

impl fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<KlineInterval> for String {
    fn from(interval: KlineInterval) -> Self {
        interval.as_str().to_string()
    }
}
