//! Plugin manager — one facade over the hook, filter, and plugin-config
//! registries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use plugable_core::config::PluginSettings;
use plugable_core::result::RegistryResult;

use crate::filters::FilterRegistry;
use crate::hooks::definitions::HookArgs;
use crate::hooks::dispatcher::{DispatchOutcome, HookDispatcher};
use crate::hooks::registry::{HookHandler, HookId, HookRegistry};
use crate::plugins::loader::PluginLoader;
use crate::plugins::registry::PluginRegistry;

/// Central facade owning all three registries.
///
/// Hosts construct one instance and pass it, or the narrower registry
/// handles it exposes, to whichever components need it. There is no
/// process-wide state; two managers are fully independent.
#[derive(Debug)]
pub struct PluginManager {
    /// Hook registry.
    hooks: Arc<HookRegistry>,
    /// Hook dispatcher.
    dispatcher: Arc<HookDispatcher>,
    /// Filter registry.
    filters: Arc<FilterRegistry>,
    /// Plugin config registry.
    plugins: Arc<PluginRegistry>,
    /// Loader settings.
    settings: PluginSettings,
}

impl PluginManager {
    /// Creates a manager with default settings.
    pub fn new() -> Self {
        Self::with_settings(PluginSettings::default())
    }

    /// Creates a manager with explicit loader settings.
    pub fn with_settings(settings: PluginSettings) -> Self {
        let hooks = Arc::new(HookRegistry::new());
        let dispatcher = Arc::new(HookDispatcher::new(hooks.clone()));

        Self {
            hooks,
            dispatcher,
            filters: Arc::new(FilterRegistry::new()),
            plugins: Arc::new(PluginRegistry::new()),
            settings,
        }
    }

    /// Loads plugin configs from the configured directory.
    ///
    /// Returns the full accumulated plugin map; names without a config file
    /// are skipped.
    pub async fn load_plugins<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> RegistryResult<HashMap<String, serde_json::Value>> {
        let directory = self.settings.directory.clone();
        self.load_plugins_from(names, directory).await
    }

    /// Loads plugin configs from an explicit base directory.
    pub async fn load_plugins_from<S: AsRef<str>>(
        &self,
        names: &[S],
        base_dir: impl AsRef<Path>,
    ) -> RegistryResult<HashMap<String, serde_json::Value>> {
        let mut loader = PluginLoader::new(base_dir.as_ref());
        if !self.settings.strict {
            loader = loader.lenient();
        }
        loader.load_into(names, &self.plugins).await
    }

    /// Registers a hook handler for an event; returns its removal token.
    pub async fn add_hook(&self, event: &str, handler: Arc<dyn HookHandler>) -> HookId {
        self.hooks.add(event, handler).await
    }

    /// Registers a batch of handlers, preserving iteration order.
    pub async fn add_hooks<I>(&self, hooks: I) -> Vec<HookId>
    where
        I: IntoIterator<Item = (String, Arc<dyn HookHandler>)>,
    {
        self.hooks.add_many(hooks).await
    }

    /// Removes a hook registration by token. No-op if unknown.
    pub async fn remove_hook(&self, event: &str, id: HookId) -> bool {
        self.hooks.remove(event, id).await
    }

    /// Fires every handler registered for `event`, in registration order.
    pub async fn do_hook(&self, event: &str, args: &HookArgs) -> RegistryResult<DispatchOutcome> {
        self.dispatcher.dispatch(event, args).await
    }

    /// Appends a payload under a filter name.
    pub async fn add_filter(&self, filter: &str, payload: serde_json::Value) {
        self.filters.add(filter, payload).await
    }

    /// Runs `transform` once over a filter's accumulated payloads.
    ///
    /// Returns `None` if no payloads were ever added under `filter`.
    pub async fn do_filter<F>(&self, filter: &str, transform: F) -> Option<serde_json::Value>
    where
        F: FnOnce(&[serde_json::Value]) -> serde_json::Value,
    {
        self.filters.apply(filter, transform).await
    }

    /// Returns the hook registry.
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hooks
    }

    /// Returns the hook dispatcher.
    pub fn dispatcher(&self) -> &Arc<HookDispatcher> {
        &self.dispatcher
    }

    /// Returns the filter registry.
    pub fn filters(&self) -> &Arc<FilterRegistry> {
        &self.filters
    }

    /// Returns the plugin config registry.
    pub fn plugins(&self) -> &Arc<PluginRegistry> {
        &self.plugins
    }

    /// Returns the loader settings.
    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}
