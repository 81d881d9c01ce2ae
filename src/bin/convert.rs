use anyhow::Result;
use fruitsight::{config, convert};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.logs.level)),
        )
        .init();

    convert::run(&config.model)?;

    info!("Conversion finished");

    Ok(())
}
