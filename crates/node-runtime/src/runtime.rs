//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Validate configuration
//! 2. Build the service container (genesis sealed here)
//! 3. Start the HTTP gateway
//!
//! Shutdown stops the gateway and waits for in-flight requests to finish.

use crate::container::{NodeConfig, ServiceContainer};
use anyhow::{Context, Result};
use sr_03_api_gateway::ApiGatewayService;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// The running node.
pub struct NodeRuntime {
    container: ServiceContainer,
    gateway: ApiGatewayService,
}

impl NodeRuntime {
    /// Validate `config` and build every service. Nothing listens yet.
    pub fn new(config: NodeConfig) -> Result<Self> {
        config.validate().context("invalid node configuration")?;

        let container = ServiceContainer::new(&config);
        let gateway = ApiGatewayService::new(config.gateway.clone(), container.registry_api())
            .context("failed to create API gateway")?;

        Ok(Self { container, gateway })
    }

    /// Bind the configured address and start serving.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        let addr = self
            .gateway
            .start()
            .await
            .context("failed to start API gateway")?;
        info!(%addr, "Star registry node started");
        Ok(addr)
    }

    /// Start serving on an already-bound listener.
    pub fn start_with_listener(&mut self, listener: TcpListener) -> Result<SocketAddr> {
        let addr = self
            .gateway
            .start_with_listener(listener)
            .context("failed to start API gateway")?;
        info!(%addr, "Star registry node started");
        Ok(addr)
    }

    /// Graceful shutdown.
    pub async fn shutdown(&mut self) -> Result<()> {
        info!("Shutting down star registry node");
        self.gateway.shutdown().await?;
        Ok(())
    }

    pub fn container(&self) -> &ServiceContainer {
        &self.container
    }
}
