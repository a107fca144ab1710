//! The hook contract: a static descriptor plus action/filter behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::definitions::{HookArgs, HookKind, HookValue, ParamType, Parameters};
use super::validator;
use crate::error::HookError;

/// Priority assigned when a descriptor does not set one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Static declaration of a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookDescriptor {
    /// Dispatch key.
    pub identifier: String,
    /// Human-readable description.
    pub description: String,
    /// Owning plugin tag.
    pub plugin: String,
    /// Named arguments callers must supply.
    #[serde(default)]
    pub parameters: Parameters,
    /// Where in the host this hook fires. Documentation only.
    #[serde(default)]
    pub trigger_point: String,
    /// Dispatch priority (higher runs first).
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Minimum argument count. `None` means the number of parameters.
    #[serde(default)]
    pub accepted_args: Option<usize>,
    /// Action or filter.
    #[serde(default)]
    pub kind: HookKind,
}

impl HookDescriptor {
    /// Creates a descriptor of the given kind with no parameters.
    pub fn new(
        kind: HookKind,
        identifier: impl Into<String>,
        plugin: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            plugin: plugin.into(),
            parameters: Parameters::new(),
            trigger_point: String::new(),
            priority: DEFAULT_PRIORITY,
            accepted_args: None,
            kind,
        }
    }

    /// Creates an action descriptor.
    pub fn action(
        identifier: impl Into<String>,
        plugin: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(HookKind::Action, identifier, plugin, description)
    }

    /// Creates a filter descriptor.
    pub fn filter(
        identifier: impl Into<String>,
        plugin: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(HookKind::Filter, identifier, plugin, description)
    }

    /// Declares a parameter.
    pub fn with_param(mut self, name: &str, ty: impl Into<ParamType>) -> Self {
        self.parameters.insert(name.to_string(), ty.into());
        self
    }

    /// Replaces the declared parameters.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the trigger point.
    pub fn with_trigger_point(mut self, trigger_point: impl Into<String>) -> Self {
        self.trigger_point = trigger_point.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Overrides the minimum argument count.
    pub fn with_accepted_args(mut self, accepted_args: usize) -> Self {
        self.accepted_args = Some(accepted_args);
        self
    }

    /// Minimum number of arguments required at call time.
    pub fn accepted_args(&self) -> usize {
        self.accepted_args.unwrap_or(self.parameters.len())
    }

    /// Whether this is a filter.
    pub fn is_filter(&self) -> bool {
        self.kind == HookKind::Filter
    }

    /// Runs the static validation rules.
    pub fn validate(&self) -> Vec<String> {
        validator::validate(self)
    }
}

/// Behavior every hook implements.
///
/// A hook is either an action (`execute`) or a filter (`apply`), selected by
/// its descriptor's [`HookKind`]; the other method keeps its pass-through
/// default.
pub trait Hook: Send + Sync + fmt::Debug {
    /// Returns the hook's static declaration.
    fn descriptor(&self) -> &HookDescriptor;

    /// Runs an action hook.
    fn execute(&self, args: &HookArgs) -> Result<(), HookError> {
        let _ = args;
        Ok(())
    }

    /// Runs a filter hook, returning the transformed value.
    fn apply(&self, value: HookValue, args: &HookArgs) -> Result<HookValue, HookError> {
        let _ = args;
        Ok(value)
    }

    /// Returns validation issues for this hook. Empty means valid.
    fn validate(&self) -> Vec<String> {
        self.descriptor().validate()
    }

    /// Fails with every issue when [`Hook::validate`] reports any.
    fn validate_or_fail(&self) -> Result<(), HookError> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        Err(HookError::Validation {
            identifier: self.identifier().to_string(),
            issues,
        })
    }

    /// Name of the implementing type, used to tell hook types apart.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Dispatch key.
    fn identifier(&self) -> &str {
        &self.descriptor().identifier
    }

    /// Owning plugin tag.
    fn plugin(&self) -> &str {
        &self.descriptor().plugin
    }

    /// Dispatch priority.
    fn priority(&self) -> i32 {
        self.descriptor().priority
    }

    /// Whether this is a filter.
    fn is_filter(&self) -> bool {
        self.descriptor().is_filter()
    }
}

/// Serializable listing entry for a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSummary {
    pub identifier: String,
    pub description: String,
    pub plugin: String,
    pub kind: HookKind,
    pub priority: i32,
    pub parameters: Parameters,
    pub trigger_point: String,
    pub type_name: String,
}

impl HookSummary {
    /// Builds a summary from any hook.
    pub fn of(hook: &dyn Hook) -> Self {
        let d = hook.descriptor();
        Self {
            identifier: d.identifier.clone(),
            description: d.description.clone(),
            plugin: d.plugin.clone(),
            kind: d.kind,
            priority: d.priority,
            parameters: d.parameters.clone(),
            trigger_point: d.trigger_point.clone(),
            type_name: hook.type_name().to_string(),
        }
    }

    /// Parameters rendered as `name: type, ...`, or `<none>`.
    pub fn parameter_list(&self) -> String {
        if self.parameters.is_empty() {
            return "<none>".to_string();
        }
        self.parameters
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}
