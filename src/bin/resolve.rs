use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let grpc_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "grpc://localhost:8258".to_string());

    let (address, options) = grpc_url::resolve(&grpc_url)?;
    println!("{address} ({} option(s))", options.len());

    Ok(())
}
