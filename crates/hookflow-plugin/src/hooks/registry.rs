//! Hook registry — plugins register hooks by identifier with priority ordering.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::definitions::{HookArgs, HookValue};
use super::executor::HookExecutor;
use super::hook::Hook;
use crate::error::HookError;

/// Registry of hooks organized by identifier.
///
/// Each identifier owns a bucket sorted by descending priority; hooks with
/// equal priority keep their registration order. Buckets themselves keep the
/// order in which their identifier was first registered.
#[derive(Debug, Default)]
pub struct HookRegistry {
    /// Identifier → hooks, highest priority first.
    hooks: RwLock<IndexMap<String, Vec<Arc<dyn Hook>>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(IndexMap::new()),
        }
    }

    /// Validates and registers a hook.
    pub fn register(&self, hook: Arc<dyn Hook>) -> Result<(), HookError> {
        if let Err(e) = hook.validate_or_fail() {
            warn!(
                identifier = %hook.identifier(),
                plugin = %hook.plugin(),
                "Hook registration rejected"
            );
            return Err(e);
        }

        let mut hooks = self.hooks.write();
        insert_sorted(&mut hooks, hook);
        Ok(())
    }

    /// Registers a batch of hooks. Nothing is registered unless every hook
    /// passes validation.
    pub fn register_many(&self, batch: Vec<Arc<dyn Hook>>) -> Result<(), HookError> {
        for hook in &batch {
            hook.validate_or_fail()?;
        }

        let mut hooks = self.hooks.write();
        let count = batch.len();
        for hook in batch {
            insert_sorted(&mut hooks, hook);
        }

        debug!(count = count, "Hook batch registered");
        Ok(())
    }

    /// Returns the highest-priority hook for an identifier.
    pub fn get(&self, identifier: &str) -> Option<Arc<dyn Hook>> {
        let hooks = self.hooks.read();
        hooks.get(identifier).and_then(|bucket| bucket.first().cloned())
    }

    /// Returns every hook for an identifier, highest priority first.
    pub fn get_all(&self, identifier: &str) -> Vec<Arc<dyn Hook>> {
        let hooks = self.hooks.read();
        hooks.get(identifier).cloned().unwrap_or_default()
    }

    /// Returns whether any hook is registered for an identifier.
    pub fn has(&self, identifier: &str) -> bool {
        let hooks = self.hooks.read();
        hooks
            .get(identifier)
            .map(|bucket| !bucket.is_empty())
            .unwrap_or(false)
    }

    /// Returns every registered hook, bucket by bucket.
    pub fn all(&self) -> Vec<Arc<dyn Hook>> {
        let hooks = self.hooks.read();
        hooks.values().flatten().cloned().collect()
    }

    /// Returns every hook owned by a plugin.
    pub fn for_plugin(&self, plugin: &str) -> Vec<Arc<dyn Hook>> {
        self.filter_all(|hook| hook.plugin() == plugin)
    }

    /// Returns every filter hook.
    pub fn filters(&self) -> Vec<Arc<dyn Hook>> {
        self.filter_all(|hook| hook.is_filter())
    }

    /// Returns every action hook.
    pub fn actions(&self) -> Vec<Arc<dyn Hook>> {
        self.filter_all(|hook| !hook.is_filter())
    }

    /// Returns the registered identifiers in first-registration order.
    pub fn identifiers(&self) -> Vec<String> {
        let hooks = self.hooks.read();
        hooks.keys().cloned().collect()
    }

    /// Total number of registered hooks.
    pub fn len(&self) -> usize {
        let hooks = self.hooks.read();
        hooks.values().map(Vec::len).sum()
    }

    /// Whether no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every hook registered under an identifier.
    pub fn remove(&self, identifier: &str) {
        let mut hooks = self.hooks.write();
        if let Some(bucket) = hooks.shift_remove(identifier) {
            info!(identifier = %identifier, count = bucket.len(), "Hooks removed");
        }
    }

    /// Removes every hook owned by a plugin, dropping emptied buckets.
    pub fn unregister_plugin(&self, plugin: &str) {
        let mut hooks = self.hooks.write();

        for bucket in hooks.values_mut() {
            bucket.retain(|hook| hook.plugin() != plugin);
        }

        hooks.retain(|_, bucket| !bucket.is_empty());

        info!(plugin = %plugin, "All hooks unregistered for plugin");
    }

    /// Removes every hook.
    pub fn clear(&self) {
        let mut hooks = self.hooks.write();
        hooks.clear();
        info!("Hook registry cleared");
    }

    /// Dispatches every hook registered under `identifier`.
    ///
    /// The chain value starts as `args["value"]` (if present). Filters replace
    /// it with their output; actions run against `args` and leave it alone.
    /// Each hook's arguments are checked before it runs, and the first failure
    /// stops the chain.
    pub fn execute(&self, identifier: &str, args: &HookArgs) -> Result<Option<HookValue>, HookError> {
        let mut chain = self.get_all(identifier);
        if chain.is_empty() {
            return Err(HookError::not_found(identifier));
        }

        chain.sort_by(|a, b| b.priority().cmp(&a.priority()));

        debug!(
            identifier = %identifier,
            hook_count = chain.len(),
            "Dispatching hook"
        );

        let mut result = args.get("value").cloned();

        let executor = HookExecutor::new();
        for hook in &chain {
            executor.validate_arguments(hook.as_ref(), args)?;

            if hook.is_filter() {
                let value = result.take().unwrap_or_default();
                result = Some(hook.apply(value, args)?);
            } else {
                hook.execute(args)?;
            }
        }

        Ok(result)
    }

    fn filter_all(&self, predicate: impl Fn(&dyn Hook) -> bool) -> Vec<Arc<dyn Hook>> {
        self.all()
            .into_iter()
            .filter(|hook| predicate(hook.as_ref()))
            .collect()
    }
}

fn insert_sorted(hooks: &mut IndexMap<String, Vec<Arc<dyn Hook>>>, hook: Arc<dyn Hook>) {
    let identifier = hook.identifier().to_string();
    let plugin = hook.plugin().to_string();
    let priority = hook.priority();

    let bucket = hooks.entry(identifier.clone()).or_default();
    bucket.push(hook);

    // Stable: equal priorities keep registration order.
    bucket.sort_by(|a, b| b.priority().cmp(&a.priority()));

    info!(
        identifier = %identifier,
        plugin = %plugin,
        priority = priority,
        "Hook registered"
    );
}
