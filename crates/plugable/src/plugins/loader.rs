//! Plugin configuration loader.
//!
//! Each plugin owns a directory under the base directory; its configuration
//! lives at `<base>/<name>/config.json`. A missing file means the plugin is
//! simply not configured and is skipped. A file that exists but does not
//! parse is an error in strict mode and a logged skip in lenient mode.

use std::collections::HashMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use plugable_core::error::{ErrorKind, RegistryError};
use plugable_core::result::RegistryResult;

use super::registry::PluginRegistry;

/// Name of the per-plugin configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// Loads per-plugin `config.json` files into a [`PluginRegistry`].
#[derive(Debug, Clone)]
pub struct PluginLoader {
    /// Directory containing one subdirectory per plugin.
    base_dir: PathBuf,
    /// Whether malformed config files abort loading.
    strict: bool,
}

impl PluginLoader {
    /// Creates a loader rooted at `base_dir`, with strict parsing.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            strict: true,
        }
    }

    /// Downgrades malformed config files from errors to logged skips.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Returns the config file path for a plugin name.
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name).join(CONFIG_FILE)
    }

    /// Loads the named plugins into `registry`, in order.
    ///
    /// Names without a config file are skipped and produce no entry.
    /// Returns the registry's full accumulated snapshot, including plugins
    /// loaded by earlier calls; the snapshot is empty if nothing has ever
    /// loaded. On error, plugins read before the failing one stay loaded.
    pub async fn load_into<S: AsRef<str>>(
        &self,
        names: &[S],
        registry: &PluginRegistry,
    ) -> RegistryResult<HashMap<String, serde_json::Value>> {
        for name in names {
            let name = name.as_ref();
            let path = self.config_path(name);

            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == IoErrorKind::NotFound => {
                    debug!(plugin = %name, path = %path.display(), "No config file, skipping");
                    continue;
                }
                Err(err) => {
                    return Err(RegistryError::with_source(
                        ErrorKind::Io,
                        format!(
                            "failed to read config for plugin '{}' at {}",
                            name,
                            path.display()
                        ),
                        err,
                    ));
                }
            };

            match serde_json::from_str(&contents) {
                Ok(config) => registry.insert(name, config).await,
                Err(err) if self.strict => {
                    return Err(RegistryError::with_source(
                        ErrorKind::Serialization,
                        format!(
                            "malformed config for plugin '{}' at {}",
                            name,
                            path.display()
                        ),
                        err,
                    ));
                }
                Err(err) => {
                    warn!(plugin = %name, path = %path.display(), error = %err, "Malformed config skipped");
                }
            }
        }

        Ok(registry.snapshot().await)
    }
}
