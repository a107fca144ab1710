//! Plugin manager — loads compiled-in plugins into a shared hook registry.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hookflow_core::config::plugin::PluginConfig;
use hookflow_core::error::AppError;
use hookflow_core::result::AppResult;

use crate::hooks::hook::Hook;
use crate::hooks::registry::HookRegistry;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin tag. Every hook the plugin provides must declare this tag.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Identifiers of the hooks registered by this plugin.
    #[serde(default)]
    pub hooks: Vec<String>,
}

/// A compiled-in component that contributes hooks.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Builds the hooks this plugin contributes.
    fn hooks(&self) -> Vec<Arc<dyn Hook>>;
}

/// Loads and unloads plugins against one hook registry.
#[derive(Debug)]
pub struct PluginManager {
    /// Hook registry shared with the host.
    hook_registry: Arc<HookRegistry>,
    /// Plugin name → metadata, in load order.
    plugins: RwLock<IndexMap<String, PluginInfo>>,
}

impl PluginManager {
    /// Creates a manager around an existing registry.
    pub fn new(hook_registry: Arc<HookRegistry>) -> Self {
        Self {
            hook_registry,
            plugins: RwLock::new(IndexMap::new()),
        }
    }

    /// Registers every hook of a plugin. Either all of them are registered or
    /// none are.
    pub fn load_plugin(&self, plugin: &dyn Plugin) -> AppResult<()> {
        let mut info = plugin.info();

        if self.plugins.read().contains_key(&info.name) {
            return Err(AppError::plugin(format!(
                "Plugin '{}' is already loaded",
                info.name
            )));
        }

        let hooks = plugin.hooks();
        if let Some(stray) = hooks.iter().find(|h| h.plugin() != info.name) {
            return Err(AppError::plugin(format!(
                "Hook '{}' declares plugin '{}' but was provided by '{}'",
                stray.identifier(),
                stray.plugin(),
                info.name
            )));
        }

        info.hooks = hooks.iter().map(|h| h.identifier().to_string()).collect();
        self.hook_registry.register_many(hooks)?;

        info!(
            plugin = %info.name,
            version = %info.version,
            hooks = info.hooks.len(),
            "Plugin loaded"
        );

        self.plugins.write().insert(info.name.clone(), info);
        Ok(())
    }

    /// Loads every plugin enabled by `config`. Returns how many were loaded.
    pub fn load_all(
        &self,
        plugins: &[Arc<dyn Plugin>],
        config: &PluginConfig,
    ) -> AppResult<usize> {
        let mut loaded = 0;

        for plugin in plugins {
            let name = plugin.info().name;
            if !config.is_enabled(&name) {
                debug!(plugin = %name, "Plugin disabled by configuration");
                continue;
            }
            self.load_plugin(plugin.as_ref())?;
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Removes a plugin and every hook it registered.
    pub fn unload_plugin(&self, name: &str) -> AppResult<()> {
        if self.plugins.write().shift_remove(name).is_none() {
            return Err(AppError::not_found(format!("Plugin '{}' not found", name)));
        }

        self.hook_registry.unregister_plugin(name);
        info!(plugin = %name, "Plugin unloaded");
        Ok(())
    }

    /// Lists loaded plugins in load order.
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugins.read().values().cloned().collect()
    }

    /// Returns the hook registry.
    pub fn hook_registry(&self) -> &Arc<HookRegistry> {
        &self.hook_registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::hook::HookDescriptor;
    use crate::traits::{FnAction, FnFilter};
    use hookflow_core::error::ErrorKind;

    #[derive(Debug)]
    struct TestPlugin {
        name: &'static str,
        hook_plugin: &'static str,
        valid: bool,
    }

    impl TestPlugin {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                hook_plugin: name,
                valid: true,
            }
        }
    }

    impl Plugin for TestPlugin {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                name: self.name.to_string(),
                version: "1.0.0".to_string(),
                description: "Test plugin".to_string(),
                hooks: Vec::new(),
            }
        }

        fn hooks(&self) -> Vec<Arc<dyn Hook>> {
            let priority = if self.valid { 10 } else { 0 };
            vec![
                Arc::new(FnAction::noop(HookDescriptor::action(
                    format!("{}_started", self.name.replace('-', "_")),
                    self.hook_plugin,
                    "Fired on start",
                ))),
                Arc::new(FnFilter::identity(
                    HookDescriptor::filter("shared_filter", self.hook_plugin, "Shared filter")
                        .with_priority(priority),
                )),
            ]
        }
    }

    fn manager() -> PluginManager {
        PluginManager::new(Arc::new(HookRegistry::new()))
    }

    #[test]
    fn test_load_registers_hooks_and_records_info() {
        let manager = manager();
        manager.load_plugin(&TestPlugin::new("alpha")).unwrap();

        let registry = manager.hook_registry();
        assert!(registry.has("alpha_started"));
        assert!(registry.has("shared_filter"));

        let plugins = manager.list_plugins();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].hooks, vec!["alpha_started", "shared_filter"]);
    }

    #[test]
    fn test_double_load_is_rejected() {
        let manager = manager();
        manager.load_plugin(&TestPlugin::new("alpha")).unwrap();
        let err = manager.load_plugin(&TestPlugin::new("alpha")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Plugin);
        assert_eq!(manager.hook_registry().len(), 2);
    }

    #[test]
    fn test_invalid_hook_loads_nothing() {
        let manager = manager();
        let plugin = TestPlugin {
            valid: false,
            ..TestPlugin::new("broken")
        };
        let err = manager.load_plugin(&plugin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(manager.hook_registry().is_empty());
        assert!(manager.list_plugins().is_empty());
    }

    #[test]
    fn test_hook_with_foreign_plugin_tag_is_rejected() {
        let manager = manager();
        let plugin = TestPlugin {
            hook_plugin: "someone-else",
            ..TestPlugin::new("alpha")
        };
        let err = manager.load_plugin(&plugin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Plugin);
        assert!(manager.hook_registry().is_empty());
    }

    #[test]
    fn test_unload_removes_only_that_plugin() {
        let manager = manager();
        manager.load_plugin(&TestPlugin::new("alpha")).unwrap();
        manager.load_plugin(&TestPlugin::new("beta")).unwrap();
        assert_eq!(manager.hook_registry().get_all("shared_filter").len(), 2);

        manager.unload_plugin("alpha").unwrap();

        let registry = manager.hook_registry();
        assert!(!registry.has("alpha_started"));
        assert!(registry.has("beta_started"));
        assert_eq!(registry.get_all("shared_filter").len(), 1);

        let err = manager.unload_plugin("alpha").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_load_all_honours_config() {
        let manager = manager();
        let plugins: Vec<Arc<dyn Plugin>> = vec![
            Arc::new(TestPlugin::new("alpha")),
            Arc::new(TestPlugin::new("beta")),
        ];
        let config = PluginConfig {
            enabled: vec!["beta".to_string()],
        };

        let loaded = manager.load_all(&plugins, &config).unwrap();
        assert_eq!(loaded, 1);
        assert!(!manager.hook_registry().has("alpha_started"));
        assert!(manager.hook_registry().has("beta_started"));
    }
}
