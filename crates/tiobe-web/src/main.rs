//! rust-tiobe — TIOBE index web service
//!
//! Run with: cargo run -p tiobe-web --bin rust-tiobe

use tiobe_config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rust_tiobe=info,tiobe_web=info,tiobe_ingestion=info,tower_http=info,info")),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting rust-tiobe...");

    let config = Config::load()?;

    if let Err(e) = tiobe_web::server::run(config).await {
        error!("Server exited with error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
