//! Shared utilities for Minecraft server plugins.
//!
//! Re-exports the member crates and wires up logging and plugin-wide config.

pub mod config;

pub use config::CommonsConfig;
pub use mc_commons_core as util;
pub use mc_commons_integration as integration;
pub use mc_commons_lang as lang;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
