//! Typed failures raised by hook validation and dispatch.

use thiserror::Error;

use hookflow_core::error::{AppError, ErrorKind};

/// Errors produced by the hook engine.
///
/// Errors returned from a hook's own `execute`/`apply` body are passed
/// through the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The hook's static declaration is malformed.
    #[error("{}", .issues.join("\n"))]
    Validation {
        /// Identifier of the rejected hook (may be empty).
        identifier: String,
        /// Every issue found, in rule order.
        issues: Vec<String>,
    },

    /// Fewer arguments were supplied than the hook accepts.
    #[error("Hook {identifier} requires {required} arguments, {provided} provided")]
    InsufficientArguments {
        identifier: String,
        required: usize,
        provided: usize,
    },

    /// A declared parameter was absent from the argument map.
    #[error("Missing required argument \"{name}\" for hook {identifier}")]
    MissingArgument { identifier: String, name: String },

    /// A declared parameter had a value of the wrong kind.
    #[error(
        "Invalid type for argument \"{name}\" in hook {identifier}. Expected {expected}, got {actual}"
    )]
    InvalidArgumentType {
        identifier: String,
        name: String,
        expected: String,
        actual: String,
    },

    /// No hook is registered under the identifier.
    #[error("Hook '{identifier}' not found")]
    NotFound { identifier: String },

    /// A hook body reported a failure.
    #[error("Hook '{identifier}' failed: {message}")]
    Body { identifier: String, message: String },
}

impl HookError {
    /// Creates a failure for use inside a hook body.
    pub fn body(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Body {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Returns whether this is one of the call-time argument failures.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientArguments { .. }
                | Self::MissingArgument { .. }
                | Self::InvalidArgumentType { .. }
        )
    }

    /// Returns the validation issues, if this is a validation failure.
    pub fn issues(&self) -> Option<&[String]> {
        match self {
            Self::Validation { issues, .. } => Some(issues),
            _ => None,
        }
    }
}

impl From<HookError> for AppError {
    fn from(err: HookError) -> Self {
        let kind = match &err {
            HookError::Validation { .. } => ErrorKind::Validation,
            HookError::NotFound { .. } => ErrorKind::NotFound,
            HookError::Body { .. } => ErrorKind::Plugin,
            _ => ErrorKind::InvalidArgument,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_issues() {
        let err = HookError::Validation {
            identifier: String::new(),
            issues: vec![
                "Hook identifier cannot be empty".to_string(),
                "Hook plugin cannot be empty".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Hook identifier cannot be empty\nHook plugin cannot be empty"
        );
        assert_eq!(err.issues().map(|i| i.len()), Some(2));
    }

    #[test]
    fn test_argument_error_grouping() {
        let missing = HookError::MissingArgument {
            identifier: "h".to_string(),
            name: "x".to_string(),
        };
        assert!(missing.is_argument_error());
        assert!(!HookError::not_found("h").is_argument_error());
        assert!(!HookError::body("h", "boom").is_argument_error());
    }

    #[test]
    fn test_maps_into_app_error_kinds() {
        let app: AppError = HookError::not_found("missing").into();
        assert_eq!(app.kind, ErrorKind::NotFound);
        assert_eq!(app.message, "Hook 'missing' not found");

        let app: AppError = HookError::InsufficientArguments {
            identifier: "h".to_string(),
            required: 2,
            provided: 1,
        }
        .into();
        assert_eq!(app.kind, ErrorKind::InvalidArgument);

        let app: AppError = HookError::body("h", "boom").into();
        assert_eq!(app.kind, ErrorKind::Plugin);
    }
}
