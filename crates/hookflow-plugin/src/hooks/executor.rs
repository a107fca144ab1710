//! Hook executor — checks call-time arguments against a hook's declared
//! parameters, then runs the action or filter path.

use tracing::debug;

use super::definitions::{HookArgs, HookValue};
use super::hook::Hook;
use crate::error::HookError;

/// Runs a single hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookExecutor;

impl HookExecutor {
    /// Creates a new executor.
    pub fn new() -> Self {
        Self
    }

    /// Validates `args` and runs `hook`.
    ///
    /// Filters receive the first argument (in insertion order) as the value
    /// to transform and return `Some(result)`. Actions return `None`.
    pub fn execute(&self, hook: &dyn Hook, args: &HookArgs) -> Result<Option<HookValue>, HookError> {
        self.validate_arguments(hook, args)?;

        if hook.is_filter() {
            let value = args.first().cloned().unwrap_or_default();
            debug!(identifier = %hook.identifier(), "Applying filter hook");
            return hook.apply(value, args).map(Some);
        }

        debug!(identifier = %hook.identifier(), "Executing action hook");
        hook.execute(args)?;
        Ok(None)
    }

    /// Checks argument count, presence, and types against the hook's schema.
    pub fn validate_arguments(&self, hook: &dyn Hook, args: &HookArgs) -> Result<(), HookError> {
        let descriptor = hook.descriptor();
        let required = descriptor.accepted_args();

        if args.len() < required {
            return Err(HookError::InsufficientArguments {
                identifier: descriptor.identifier.clone(),
                required,
                provided: args.len(),
            });
        }

        for (name, ty) in &descriptor.parameters {
            let value = args.get(name).ok_or_else(|| HookError::MissingArgument {
                identifier: descriptor.identifier.clone(),
                name: name.clone(),
            })?;

            if !ty.matches(value) {
                return Err(HookError::InvalidArgumentType {
                    identifier: descriptor.identifier.clone(),
                    name: name.clone(),
                    expected: ty.to_string(),
                    actual: value.type_name().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::hooks::hook::HookDescriptor;
    use crate::traits::{FnAction, FnFilter};

    fn two_params(d: HookDescriptor) -> HookDescriptor {
        d.with_param("param1", "string").with_param("param2", "int")
    }

    #[test]
    fn test_execute_action_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let hook = FnAction::new(
            two_params(HookDescriptor::action("test-hook", "test-plugin", "Test")),
            move |_args| {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        );

        let args = HookArgs::new().with("param1", "value1").with("param2", 42);
        let out = HookExecutor::new().execute(&hook, &args).unwrap();

        assert!(out.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_execute_filter_hook_uses_args() {
        let hook = FnFilter::new(
            two_params(HookDescriptor::filter("test-hook", "test-plugin", "Test")),
            |_value, args| {
                let p = args.get_str("param1").unwrap_or_default();
                Ok(HookValue::from(format!("{p}_filtered")))
            },
        );

        let args = HookArgs::new().with("param1", "value1").with("param2", 42);
        let out = HookExecutor::new().execute(&hook, &args).unwrap();
        assert_eq!(out, Some(HookValue::from("value1_filtered")));
    }

    #[test]
    fn test_filter_receives_first_value_by_position() {
        let hook = FnFilter::new(HookDescriptor::filter("pos", "p", "d"), |value, _args| {
            Ok(value)
        });

        let args = HookArgs::new().with("second", "b").with("value", "a");
        let out = HookExecutor::new().execute(&hook, &args).unwrap();
        assert_eq!(out, Some(HookValue::from("b")));
    }

    #[test]
    fn test_filter_with_no_args_receives_null() {
        let hook = FnFilter::new(HookDescriptor::filter("empty", "p", "d"), |value, _args| {
            Ok(value)
        });
        let out = HookExecutor::new().execute(&hook, &HookArgs::new()).unwrap();
        assert_eq!(out, Some(HookValue::default()));
    }

    #[test]
    fn test_validates_argument_types() {
        let hook = FnAction::noop(two_params(HookDescriptor::action("test-hook", "p", "d")));
        let args = HookArgs::new().with("param1", 123).with("param2", "not-an-int");

        let err = HookExecutor::new().execute(&hook, &args).unwrap_err();
        assert_eq!(
            err,
            HookError::InvalidArgumentType {
                identifier: "test-hook".to_string(),
                name: "param1".to_string(),
                expected: "string".to_string(),
                actual: "int".to_string(),
            }
        );
    }

    #[test]
    fn test_validates_required_arguments() {
        let hook = FnAction::noop(
            HookDescriptor::action("test-hook", "p", "d").with_param("required", "string"),
        );
        let args = HookArgs::new().with("wrong", "value");

        let err = HookExecutor::new().execute(&hook, &args).unwrap_err();
        assert!(matches!(err, HookError::MissingArgument { ref name, .. } if name == "required"));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_insufficient_argument_count() {
        let hook = FnAction::noop(two_params(HookDescriptor::action("test-hook", "p", "d")));
        let args = HookArgs::new().with("param1", "only one");

        let err = HookExecutor::new().execute(&hook, &args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Hook test-hook requires 2 arguments, 1 provided"
        );
    }

    #[test]
    fn test_int_schema_round_trip() {
        let hook = FnAction::noop(HookDescriptor::action("x_hook", "p", "d").with_param("x", "int"));
        let executor = HookExecutor::new();

        assert!(executor.execute(&hook, &HookArgs::new().with("x", 5)).is_ok());

        let err = executor
            .execute(&hook, &HookArgs::new().with("x", "five"))
            .unwrap_err();
        assert!(err.is_argument_error());

        let err = executor.execute(&hook, &HookArgs::new()).unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_permissive_tags_accept_anything() {
        let hook = FnAction::noop(
            HookDescriptor::action("lenient", "p", "d")
                .with_param("user", "App\\Models\\User")
                .with_param("anything", "mixed"),
        );
        let args = HookArgs::new()
            .with("user", json!({"id": 1}))
            .with("anything", HookValue::callable(|_| json!(null)));
        assert!(HookExecutor::new().execute(&hook, &args).is_ok());
    }

    #[test]
    fn test_accepted_args_override_still_checks_declared_names() {
        let hook = FnAction::noop(
            HookDescriptor::action("lax", "p", "d")
                .with_param("a", "string")
                .with_accepted_args(0),
        );
        let err = HookExecutor::new()
            .execute(&hook, &HookArgs::new())
            .unwrap_err();
        assert!(matches!(err, HookError::MissingArgument { .. }));
    }

    #[test]
    fn test_body_error_propagates_verbatim() {
        let hook = FnAction::new(HookDescriptor::action("boom", "p", "d"), |_args| {
            Err(HookError::body("boom", "database unavailable"))
        });
        let err = HookExecutor::new()
            .execute(&hook, &HookArgs::new())
            .unwrap_err();
        assert_eq!(err, HookError::body("boom", "database unavailable"));
    }
}
