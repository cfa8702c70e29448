pub mod builder;
pub mod client;
pub mod codec;
pub mod market_data;
pub mod server;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_client, build_client_from_env, build_rest};
pub use client::BinanceClient;
pub use codec::{decode_depth, decode_klines, decode_server_time};
pub use market_data::{DepthService, KlinesService};
pub use server::{ClockOffsetService, PingService, ServerTimeService};
pub use types::{Ask, Bid, DepthResponse, Kline};
