use binance_rest::exchanges::binance::build_client_from_env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = build_client_from_env("BINANCE")?;

    client.ping().send().await?;
    println!("✅ Binance reachable");

    let server_time = client.server_time().send().await?;
    println!("Server time: {}", server_time);

    let offset = client.clock_offset().measure().await?;
    println!("Local clock is {} ms ahead of the exchange", offset);
    println!(
        "Timestamp a signed request would carry: {}",
        client.server_timestamp()
    );

    Ok(())
}
