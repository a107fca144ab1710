//! Shared hooks for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hookflow_plugin::prelude::*;

/// Action that counts how often it ran.
#[derive(Debug)]
pub struct CountingAction {
    descriptor: HookDescriptor,
    calls: AtomicUsize,
}

impl CountingAction {
    pub fn new(descriptor: HookDescriptor) -> Arc<Self> {
        Arc::new(Self {
            descriptor,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Hook for CountingAction {
    fn descriptor(&self) -> &HookDescriptor {
        &self.descriptor
    }

    fn execute(&self, _args: &HookArgs) -> Result<(), HookError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Filter that appends a fixed suffix to a string value.
pub fn suffix_filter(identifier: &str, priority: i32, suffix: &'static str) -> Arc<dyn Hook> {
    Arc::new(FnFilter::new(
        HookDescriptor::filter(identifier, "test-plugin", "Appends a suffix").with_priority(priority),
        move |value, _args| {
            let base = value.as_str().unwrap_or_default().to_string();
            Ok(HookValue::from(format!("{base}{suffix}")))
        },
    ))
}

/// Action with no parameters.
pub fn noop_action(identifier: &str, priority: i32) -> Arc<dyn Hook> {
    Arc::new(FnAction::noop(
        HookDescriptor::action(identifier, "test-plugin", "Does nothing").with_priority(priority),
    ))
}
