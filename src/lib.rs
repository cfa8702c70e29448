pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::ExchangeError,
    kernel::{ReqwestRest, Request, RestClient},
    params::{ParamValue, ParameterSet},
    types::{KlineInterval, PriceLevel},
};
pub use exchanges::binance::BinanceClient;
pub use exchanges::binance_options::BinanceOptionsClient;
