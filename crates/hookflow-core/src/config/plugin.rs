//! Plugin selection configuration.

use serde::{Deserialize, Serialize};

/// Which compiled-in plugins the host registers at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin tags to load. An empty list loads every compiled-in plugin.
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl PluginConfig {
    /// Returns whether the plugin with the given tag should be loaded.
    pub fn is_enabled(&self, plugin: &str) -> bool {
        self.enabled.is_empty() || self.enabled.iter().any(|p| p == plugin)
    }
}
