//! API Gateway service - main entry point.
//!
//! Owns the HTTP server task and its graceful-shutdown channel.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::build_router;
use sr_02_ownership::StarRegistryApi;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    registry: Arc<dyn StarRegistryApi>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<std::io::Result<()>>>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(
        config: GatewayConfig,
        registry: Arc<dyn StarRegistryApi>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            registry,
            shutdown_tx: None,
            server: None,
        })
    }

    /// Bind the configured address and start serving.
    ///
    /// Returns once the listener is bound; the server runs on a spawned task.
    pub async fn start(&mut self) -> Result<SocketAddr, GatewayError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;
        self.start_with_listener(listener)
    }

    /// Start serving on an already-bound listener.
    pub fn start_with_listener(&mut self, listener: TcpListener) -> Result<SocketAddr, GatewayError> {
        if self.server.is_some() {
            return Err(GatewayError::AlreadyStarted);
        }

        let local_addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = build_router(Arc::clone(&self.registry), &self.config);

        info!(addr = %local_addr, "Starting HTTP server");
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    // A dropped sender also stops the server
                    let _ = shutdown_rx.await;
                })
                .await
        });

        self.shutdown_tx = Some(shutdown_tx);
        self.server = Some(server);
        Ok(local_addr)
    }

    /// Whether the server task is running.
    pub fn is_running(&self) -> bool {
        self.server.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Trigger graceful shutdown and wait for in-flight requests to drain.
    pub async fn shutdown(&mut self) -> Result<(), GatewayError> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        let Some(server) = self.server.take() else {
            return Ok(());
        };

        match server.await {
            Ok(Ok(())) => {
                info!("API Gateway stopped");
                Ok(())
            }
            Ok(Err(e)) => {
                error!(error = %e, "HTTP server error");
                Err(GatewayError::Server(e.to_string()))
            }
            Err(e) => {
                error!(error = %e, "HTTP server task failed");
                Err(GatewayError::Server(e.to_string()))
            }
        }
    }
}
