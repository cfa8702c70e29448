pub mod client;
pub mod codec;
pub mod market_data;
pub mod types;

pub use client::{build_options_client, BinanceOptionsClient};
pub use codec::decode_klines;
pub use market_data::OptionsKlinesService;
pub use types::OptionsKline;
