pub mod binance;
pub mod binance_options;
