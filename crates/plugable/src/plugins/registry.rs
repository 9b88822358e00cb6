//! Plugin config registry — parsed per-plugin configuration, keyed by name.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;

/// Registry of parsed plugin configurations.
///
/// The config tree under each name is plugin-defined and never validated
/// here. A name that is absent was either never requested or had no config
/// file on disk.
#[derive(Debug)]
pub struct PluginRegistry {
    /// Plugin name → parsed `config.json` tree.
    configs: RwLock<HashMap<String, serde_json::Value>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            configs: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a plugin's configuration, replacing any previous one.
    pub async fn insert(&self, name: &str, config: serde_json::Value) {
        let mut configs = self.configs.write().await;
        let replaced = configs.insert(name.to_string(), config).is_some();
        info!(plugin = %name, replaced, "Plugin configuration stored");
    }

    /// Returns a plugin's configuration, if loaded.
    pub async fn get(&self, name: &str) -> Option<serde_json::Value> {
        let configs = self.configs.read().await;
        configs.get(name).cloned()
    }

    /// Returns whether a plugin's configuration is loaded.
    pub async fn contains(&self, name: &str) -> bool {
        let configs = self.configs.read().await;
        configs.contains_key(name)
    }

    /// Returns the names of all loaded plugins.
    pub async fn names(&self) -> Vec<String> {
        let configs = self.configs.read().await;
        configs.keys().cloned().collect()
    }

    /// Returns the number of loaded plugins.
    pub async fn count(&self) -> usize {
        let configs = self.configs.read().await;
        configs.len()
    }

    /// Returns whether no plugins are loaded.
    pub async fn is_empty(&self) -> bool {
        self.count().await == 0
    }

    /// Returns a full copy of the accumulated plugin map.
    pub async fn snapshot(&self) -> HashMap<String, serde_json::Value> {
        let configs = self.configs.read().await;
        configs.clone()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_get_contains() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty().await);

        registry.insert("events", json!({"enabled": true})).await;

        assert!(registry.contains("events").await);
        assert_eq!(registry.get("events").await, Some(json!({"enabled": true})));
        assert_eq!(registry.get("news").await, None);
        assert_eq!(registry.count().await, 1);
        assert_eq!(registry.names().await, vec!["events".to_string()]);
    }

    #[tokio::test]
    async fn test_insert_overwrites() {
        let registry = PluginRegistry::new();
        registry.insert("events", json!({"version": 1})).await;
        registry.insert("events", json!({"version": 2})).await;

        assert_eq!(registry.count().await, 1);
        assert_eq!(registry.get("events").await, Some(json!({"version": 2})));
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let registry = PluginRegistry::new();
        registry.insert("a", json!(1)).await;

        let mut snapshot = registry.snapshot().await;
        snapshot.insert("b".to_string(), json!(2));

        assert_eq!(registry.count().await, 1);
        assert!(!registry.contains("b").await);
    }
}
