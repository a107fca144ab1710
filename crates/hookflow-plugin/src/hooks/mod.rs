//! Hook system — contract, validation, executor, and registry.

pub mod definitions;
pub mod executor;
pub mod hook;
pub mod registry;
pub mod validator;

pub use definitions::{HookArgs, HookKind, HookValue, ParamType, Parameters};
pub use executor::HookExecutor;
pub use hook::{DEFAULT_PRIORITY, Hook, HookDescriptor, HookSummary};
pub use registry::HookRegistry;
