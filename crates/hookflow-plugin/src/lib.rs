//! # hookflow-plugin
//!
//! Hook engine for HookFlow. Provides:
//!
//! - The hook contract (`HookDescriptor` + the `Hook` trait)
//! - Static validation of hook declarations
//! - An executor that checks call-time arguments against the declared schema
//! - A hook registry with priority-ordered buckets and filter/action dispatch
//! - Compiled-in plugin loading, a validation report, and documentation rendering

pub mod docs;
pub mod error;
pub mod hooks;
pub mod macros;
pub mod manager;
pub mod prelude;
pub mod report;
pub mod traits;

pub use error::HookError;
pub use hooks::definitions::{HookArgs, HookKind, HookValue, ParamType, Parameters};
pub use hooks::executor::HookExecutor;
pub use hooks::hook::{Hook, HookDescriptor, HookSummary};
pub use hooks::registry::HookRegistry;
pub use manager::{Plugin, PluginInfo, PluginManager};
pub use report::ValidationReport;
