//! Convenience result type alias for HookFlow.

use crate::error::AppError;

/// A specialized `Result` type for HookFlow application operations.
///
/// Hook bodies and the engine itself use the richer `HookError`; this alias
/// is for the application boundary (configuration, CLI, plugin wiring).
pub type AppResult<T> = Result<T, AppError>;
