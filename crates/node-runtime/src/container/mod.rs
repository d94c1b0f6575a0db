//! # Service Container
//!
//! Holds the registry service with its ledger, shared with the gateway
//! through `Arc<dyn StarRegistryApi>`.

pub mod config;

pub use config::{ConfigError, NodeConfig};

use sr_01_ledger::Ledger;
use sr_02_ownership::{StarRegistryApi, StarRegistryService};
use std::sync::Arc;
use tracing::info;

/// Production registry: system clock, EIP-191 signatures.
pub type Registry = StarRegistryService<Ledger>;

/// Central container for the node's long-lived services.
pub struct ServiceContainer {
    registry: Arc<Registry>,
}

impl ServiceContainer {
    /// Build every service from `config`. The ledger seals its genesis
    /// block here.
    pub fn new(config: &NodeConfig) -> Self {
        let registry = Arc::new(StarRegistryService::with_config(config.ownership.clone()));
        info!(
            height = registry.chain_height(),
            window_secs = config.ownership.challenge_window_secs,
            "Registry initialized"
        );
        Self { registry }
    }

    /// Concrete registry, for callers that need the ledger itself.
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Registry behind its inbound port.
    pub fn registry_api(&self) -> Arc<dyn StarRegistryApi> {
        self.registry.clone()
    }
}
