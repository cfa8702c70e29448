use binance_rest::core::types::KlineInterval;
use binance_rest::exchanges::binance::build_client_from_env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("🚀 K-lines Example");
    println!("==================");

    let client = build_client_from_env("BINANCE")?;

    // Last 10 1-minute k-lines for BTCUSDT
    let klines = client
        .klines()
        .symbol("BTCUSDT")
        .interval(KlineInterval::Minutes1)
        .limit(10)
        .send()
        .await?;

    println!("✅ Retrieved {} k-lines for BTCUSDT:", klines.len());
    for (i, kline) in klines.iter().enumerate() {
        println!(
            "  {}. Time: {}, O: {}, H: {}, L: {}, C: {}, V: {}, trades: {}",
            i + 1,
            kline.open_time,
            kline.open,
            kline.high,
            kline.low,
            kline.close,
            kline.volume,
            kline.trade_num
        );
    }

    println!("\n📖 Order book (top 5)");
    let depth = client.depth().symbol("BTCUSDT").limit(5).send().await?;
    println!("lastUpdateId: {}", depth.last_update_id);
    for (bid, ask) in depth.bids.iter().zip(depth.asks.iter()) {
        println!(
            "  bid {} x {}   |   ask {} x {}",
            bid.price, bid.quantity, ask.price, ask.quantity
        );
    }

    Ok(())
}
