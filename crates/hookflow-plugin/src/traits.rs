//! Closure-based hooks for quick hook creation.

use std::sync::Arc;

use crate::error::HookError;
use crate::hooks::definitions::{HookArgs, HookKind, HookValue};
use crate::hooks::hook::{Hook, HookDescriptor};

type ActionFn = Arc<dyn Fn(&HookArgs) -> Result<(), HookError> + Send + Sync>;
type FilterFn = Arc<dyn Fn(HookValue, &HookArgs) -> Result<HookValue, HookError> + Send + Sync>;

/// An action hook backed by a closure.
///
/// The descriptor's kind is forced to [`HookKind::Action`].
#[derive(Clone)]
pub struct FnAction {
    descriptor: HookDescriptor,
    handler: ActionFn,
}

impl std::fmt::Debug for FnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAction")
            .field("descriptor", &self.descriptor)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl FnAction {
    /// Creates a new closure-based action.
    pub fn new<F>(mut descriptor: HookDescriptor, handler: F) -> Self
    where
        F: Fn(&HookArgs) -> Result<(), HookError> + Send + Sync + 'static,
    {
        descriptor.kind = HookKind::Action;
        Self {
            descriptor,
            handler: Arc::new(handler),
        }
    }

    /// Creates an action that does nothing.
    pub fn noop(descriptor: HookDescriptor) -> Self {
        Self::new(descriptor, |_| Ok(()))
    }
}

impl Hook for FnAction {
    fn descriptor(&self) -> &HookDescriptor {
        &self.descriptor
    }

    fn execute(&self, args: &HookArgs) -> Result<(), HookError> {
        (self.handler)(args)
    }
}

/// A filter hook backed by a closure.
///
/// The descriptor's kind is forced to [`HookKind::Filter`].
#[derive(Clone)]
pub struct FnFilter {
    descriptor: HookDescriptor,
    handler: FilterFn,
}

impl std::fmt::Debug for FnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFilter")
            .field("descriptor", &self.descriptor)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl FnFilter {
    /// Creates a new closure-based filter.
    pub fn new<F>(mut descriptor: HookDescriptor, handler: F) -> Self
    where
        F: Fn(HookValue, &HookArgs) -> Result<HookValue, HookError> + Send + Sync + 'static,
    {
        descriptor.kind = HookKind::Filter;
        Self {
            descriptor,
            handler: Arc::new(handler),
        }
    }

    /// Creates a filter that returns its input unchanged.
    pub fn identity(descriptor: HookDescriptor) -> Self {
        Self::new(descriptor, |value, _| Ok(value))
    }
}

impl Hook for FnFilter {
    fn descriptor(&self) -> &HookDescriptor {
        &self.descriptor
    }

    fn apply(&self, value: HookValue, args: &HookArgs) -> Result<HookValue, HookError> {
        (self.handler)(value, args)
    }
}
