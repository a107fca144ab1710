//! User management plugin for HookFlow.
//!
//! Provides an action fired before a user is created and a filter that
//! normalizes user data before it is saved.

pub mod hooks;
pub mod plugin;

pub use hooks::{BeforeUserCreatedHook, FilterUserDataHook};
pub use plugin::{PLUGIN_NAME, UserManagementPlugin, hooks, register};
