//! Prelude for convenient imports.

pub use crate::error::HookError;
pub use crate::hooks::definitions::{HookArgs, HookKind, HookValue, ParamType, Parameters};
pub use crate::hooks::executor::HookExecutor;
pub use crate::hooks::hook::{DEFAULT_PRIORITY, Hook, HookDescriptor};
pub use crate::hooks::registry::HookRegistry;
pub use crate::manager::{Plugin, PluginInfo};
pub use crate::traits::{FnAction, FnFilter};

pub use crate::{hook_args, hook_params};
