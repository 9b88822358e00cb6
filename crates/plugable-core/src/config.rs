//! Plugin loader configuration.

use serde::{Deserialize, Serialize};

/// Settings for the plugin configuration loader.
///
/// The struct is plain serde so a host application can embed it as a section
/// of its own configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Directory containing one subdirectory per plugin.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
    /// Whether a config file that exists but fails to parse aborts loading.
    /// When disabled the file is skipped with a warning instead.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}

fn default_strict() -> bool {
    true
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
            strict: default_strict(),
        }
    }
}
