//! # Star Registry Node
//!
//! The main entry point for the star registry node.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG` overrides the default `info` level)
//! 2. Load configuration (defaults + `SR_*` environment variables)
//! 3. Build the ledger and seal genesis
//! 4. Start the HTTP gateway
//! 5. Run until Ctrl+C, then shut down gracefully

use anyhow::Result;
use node_runtime::{NodeConfig, NodeRuntime};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = NodeConfig::from_env();

    // Create and start the node runtime
    let mut runtime = NodeRuntime::new(config)?;
    runtime.start().await?;

    // Keep the node running
    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    runtime.shutdown().await?;

    Ok(())
}
