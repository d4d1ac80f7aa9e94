#![warn(missing_docs)]
//! Optional integrations with other plugins installed on the server.
//!
//! Integrations are registered by plugin id up front and only constructed when
//! [`IntegrationHandler::integrate`] finds that plugin on the host.

mod handler;

pub use handler::{IntegrationConstructor, IntegrationHandler};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Metadata for a plugin installed on the host server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Id the plugin is registered under (e.g. `"WorldGuard"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Version string as reported by the plugin.
    pub version: String,
}

impl PluginInfo {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Looks up installed plugins.
pub trait PluginHost {
    /// Installed plugin registered under `id`, if any.
    fn plugin(&self, id: &str) -> Option<PluginInfo>;
}

/// Lifecycle hooks for an integration with another plugin.
pub trait PluginIntegration: AsAny {
    /// Plugin this integration talks to.
    fn integrated_plugin(&self) -> &PluginInfo;

    /// Called once, right after the integration is accepted.
    fn load(&mut self);

    /// Called when the owning plugin enables.
    fn enable(&mut self);

    /// Called when the owning plugin disables.
    fn disable(&mut self);

    /// Whether the installed plugin version is usable. Unsupported
    /// integrations are discarded before [`Self::load`].
    fn is_supported(&self) -> bool {
        true
    }
}

/// Downcasting support for boxed integrations.
pub trait AsAny: Any {
    /// `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;
    /// `self` as mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PluginHost for Vec<PluginInfo> {
    fn plugin(&self, id: &str) -> Option<PluginInfo> {
        self.iter().find(|info| info.id == id).cloned()
    }
}
