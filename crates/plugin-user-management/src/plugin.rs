//! User management plugin — registers its hooks with a HookFlow registry.

use std::sync::Arc;

use tracing::info;

use hookflow_plugin::prelude::*;

use crate::hooks::{BeforeUserCreatedHook, FilterUserDataHook};

/// Plugin tag shared by every hook in this crate.
pub const PLUGIN_NAME: &str = "user-management";

/// User management plugin
#[derive(Debug, Default)]
pub struct UserManagementPlugin;

impl UserManagementPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for UserManagementPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "User lifecycle hooks".to_string(),
            hooks: Vec::new(),
        }
    }

    fn hooks(&self) -> Vec<Arc<dyn Hook>> {
        hooks()
    }
}

/// Builds every hook this plugin provides.
pub fn hooks() -> Vec<Arc<dyn Hook>> {
    vec![
        Arc::new(BeforeUserCreatedHook::new()),
        Arc::new(FilterUserDataHook::new()),
    ]
}

/// Registers every hook of this plugin. Nothing is registered on failure.
pub fn register(registry: &HookRegistry) -> Result<(), HookError> {
    let hooks = hooks();
    let count = hooks.len();
    registry.register_many(hooks)?;
    info!(plugin = PLUGIN_NAME, count = count, "User management hooks registered");
    Ok(())
}
