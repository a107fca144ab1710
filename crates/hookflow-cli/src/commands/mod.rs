//! CLI command definitions and dispatch.

pub mod document;
pub mod fire;
pub mod list;
pub mod validate;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use hookflow_core::config::AppConfig;
use hookflow_core::error::AppError;
use hookflow_plugin::{Hook, HookRegistry, Plugin, PluginManager};
use plugin_user_management::UserManagementPlugin;

use crate::output::OutputFormat;

/// HookFlow — inspect, validate, document, and fire plugin hooks
#[derive(Debug, Parser)]
#[command(name = "hookflow", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded next to the configuration file
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered hooks
    List(list::ListArgs),
    /// Validate every hook in the plugin catalog
    Validate(validate::ValidateArgs),
    /// Generate hook documentation
    Document(document::DocumentArgs),
    /// Dispatch a hook with JSON arguments
    Fire(fire::FireArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, config, self.format).await,
            Commands::Validate(args) => validate::execute(args, config, self.format).await,
            Commands::Document(args) => document::execute(args, config).await,
            Commands::Fire(args) => fire::execute(args, config, self.format).await,
        }
    }
}

/// Every plugin compiled into this binary.
pub fn catalog() -> Vec<Arc<dyn Plugin>> {
    vec![Arc::new(UserManagementPlugin::new())]
}

/// Hooks of every enabled plugin, unregistered and unvalidated.
pub fn enabled_hooks(config: &AppConfig) -> Vec<Arc<dyn Hook>> {
    catalog()
        .iter()
        .filter(|p| config.plugins.is_enabled(&p.info().name))
        .flat_map(|p| p.hooks())
        .collect()
}

/// Helper: build a registry holding the hooks of every enabled plugin
pub fn load_registry(config: &AppConfig) -> Result<Arc<HookRegistry>, AppError> {
    let manager = PluginManager::new(Arc::new(HookRegistry::new()));
    let loaded = manager.load_all(&catalog(), &config.plugins)?;
    tracing::debug!(plugins = loaded, hooks = manager.hook_registry().len(), "Registry ready");
    Ok(Arc::clone(manager.hook_registry()))
}
