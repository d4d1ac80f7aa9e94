//! Registry that builds, loads and drives plugin integrations.

use std::any::TypeId;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::{PluginHost, PluginInfo, PluginIntegration};

/// Builds an integration for a plugin found on the host.
pub type IntegrationConstructor = Box<dyn Fn(&PluginInfo) -> Box<dyn PluginIntegration>>;

/// Registry of optional plugin integrations.
///
/// At most one integration per concrete type is kept; integrating a second one
/// of the same type replaces the first.
pub struct IntegrationHandler {
    owner: String,
    constructors: BTreeMap<String, IntegrationConstructor>,
    integrations: Vec<Box<dyn PluginIntegration>>,
}

impl IntegrationHandler {
    /// Create a handler for the plugin named `owner` (used in log output).
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            constructors: BTreeMap::new(),
            integrations: Vec::new(),
        }
    }

    /// Register how to build an integration for `plugin_id`. Replaces any
    /// constructor already registered for that id.
    pub fn register_integration<F>(&mut self, plugin_id: &str, constructor: F)
    where
        F: Fn(&PluginInfo) -> Box<dyn PluginIntegration> + 'static,
    {
        self.constructors
            .insert(plugin_id.to_string(), Box::new(constructor));
    }

    /// Number of registered constructors.
    pub fn registered(&self) -> usize {
        self.constructors.len()
    }

    /// Construct, filter and load integrations for every registered plugin
    /// present on `host`. Plugins are visited in id order. Returns the number
    /// of integrations loaded by this call.
    pub fn integrate<H: PluginHost + ?Sized>(&mut self, host: &H) -> usize {
        let mut loaded = 0;

        for (plugin_id, constructor) in &self.constructors {
            let Some(plugin) = host.plugin(plugin_id) else {
                debug!(owner = %self.owner, "Plugin {plugin_id} not installed, skipping integration");
                continue;
            };

            let mut integration = constructor(&plugin);
            if !integration.is_supported() {
                debug!(
                    owner = %self.owner,
                    "Integration for {} {} is not supported",
                    plugin.name,
                    plugin.version
                );
                continue;
            }

            integration.load();
            info!(
                owner = %self.owner,
                "Found and integrated with {}",
                integration.integrated_plugin().name
            );

            let type_id = type_of(integration.as_ref());
            self.integrations
                .retain(|existing| type_of(existing.as_ref()) != type_id);
            self.integrations.push(integration);
            loaded += 1;
        }

        loaded
    }

    /// Loaded integration of concrete type `T`.
    pub fn integration<T: PluginIntegration>(&self) -> Option<&T> {
        self.integrations
            .iter()
            .find_map(|integration| downcast_ref::<T>(integration.as_ref()))
    }

    /// Mutable access to the loaded integration of concrete type `T`.
    pub fn integration_mut<T: PluginIntegration>(&mut self) -> Option<&mut T> {
        self.integrations
            .iter_mut()
            .find_map(|integration| downcast_mut::<T>(integration.as_mut()))
    }

    /// Every loaded integration, in load order.
    pub fn integrations(&self) -> impl Iterator<Item = &dyn PluginIntegration> + '_ {
        self.integrations.iter().map(|integration| integration.as_ref())
    }

    /// Enable every loaded integration.
    pub fn enable_integrations(&mut self) {
        for integration in &mut self.integrations {
            integration.enable();
        }
    }

    /// Disable every loaded integration. With `clear_constructors`, the
    /// registered constructors are dropped so a later [`Self::integrate`]
    /// finds nothing new; loaded integrations stay queryable.
    pub fn disable_integrations(&mut self, clear_constructors: bool) {
        for integration in &mut self.integrations {
            integration.disable();
        }

        if clear_constructors {
            self.constructors.clear();
        }
    }
}

impl std::fmt::Debug for IntegrationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationHandler")
            .field("owner", &self.owner)
            .field("registered", &self.constructors.keys().collect::<Vec<_>>())
            .field(
                "integrations",
                &self
                    .integrations
                    .iter()
                    .map(|i| &i.integrated_plugin().name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn type_of(integration: &dyn PluginIntegration) -> TypeId {
    integration.as_any().type_id()
}

fn downcast_ref<T: PluginIntegration>(integration: &dyn PluginIntegration) -> Option<&T> {
    integration.as_any().downcast_ref::<T>()
}

fn downcast_mut<T: PluginIntegration>(integration: &mut dyn PluginIntegration) -> Option<&mut T> {
    integration.as_any_mut().downcast_mut::<T>()
}
