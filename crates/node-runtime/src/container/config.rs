//! # Node Configuration
//!
//! Unified configuration for the gateway and the ownership protocol.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SR_HTTP_HOST` | `gateway.host` |
//! | `SR_HTTP_PORT` | `gateway.port` |
//! | `SR_CHALLENGE_WINDOW_SECS` | `ownership.challenge_window_secs` |
//! | `SR_MAX_CLOCK_SKEW_SECS` | `ownership.max_clock_skew_secs` |
//!
//! Unparseable values are logged and ignored.

use serde::{Deserialize, Serialize};
use sr_02_ownership::OwnershipConfig;
use sr_03_api_gateway::GatewayConfig;
use std::str::FromStr;
use tracing::{info, warn};

pub const ENV_HTTP_HOST: &str = "SR_HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "SR_HTTP_PORT";
pub const ENV_CHALLENGE_WINDOW_SECS: &str = "SR_CHALLENGE_WINDOW_SECS";
pub const ENV_MAX_CLOCK_SKEW_SECS: &str = "SR_MAX_CLOCK_SKEW_SECS";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// HTTP gateway configuration.
    pub gateway: GatewayConfig,
    /// Challenge timelock configuration.
    pub ownership: OwnershipConfig,
}

impl NodeConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_from(&lookup, ENV_HTTP_HOST, &mut config.gateway.host);
        override_from(&lookup, ENV_HTTP_PORT, &mut config.gateway.port);
        override_from(
            &lookup,
            ENV_CHALLENGE_WINDOW_SECS,
            &mut config.ownership.challenge_window_secs,
        );
        override_from(
            &lookup,
            ENV_MAX_CLOCK_SKEW_SECS,
            &mut config.ownership.max_clock_skew_secs,
        );

        config
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.ownership.validate()?;
        Ok(())
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, field: &mut T)
where
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return;
    };

    match raw.trim().parse() {
        Ok(value) => {
            info!(key, ?value, "Loaded setting from environment");
            *field = value;
        }
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable environment override"),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("gateway: {0}")]
    Gateway(#[from] sr_03_api_gateway::ConfigError),

    #[error("ownership: {0}")]
    Ownership(#[from] sr_02_ownership::ConfigError),
}
