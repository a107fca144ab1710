//! Convenience macros for hook authors.

/// Builds a [`HookArgs`](crate::hooks::definitions::HookArgs) map. Keys keep
/// the order they are written in.
///
/// # Example
/// ```rust,ignore
/// let args = hook_args! {
///     "userData" => json!({"name": "Ann"}),
///     "isNewUser" => true,
/// };
/// ```
#[macro_export]
macro_rules! hook_args {
    () => {
        $crate::prelude::HookArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::prelude::HookArgs::new();
        $(
            args.insert($key, $value);
        )+
        args
    }};
}

/// Builds a parameter schema (`name → type tag`).
///
/// # Example
/// ```rust,ignore
/// let params = hook_params! {
///     "userData" => "array",
///     "context" => "string",
/// };
/// ```
#[macro_export]
macro_rules! hook_params {
    () => {
        $crate::prelude::Parameters::new()
    };
    ($($name:expr => $ty:expr),+ $(,)?) => {{
        let mut params = $crate::prelude::Parameters::new();
        $(
            params.insert(
                $name.to_string(),
                $crate::prelude::ParamType::from($ty),
            );
        )+
        params
    }};
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::prelude::*;

    #[test]
    fn test_hook_args_keeps_order() {
        let args = hook_args! {
            "b" => 1,
            "a" => json!({"x": true}),
            "c" => "text",
        };
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(args.get_str("c"), Some("text"));
    }

    #[test]
    fn test_empty_forms() {
        let args = hook_args!();
        assert!(args.is_empty());
        let params = hook_params!();
        assert!(params.is_empty());
    }

    #[test]
    fn test_hook_params_parses_aliases() {
        let params = hook_params! {
            "count" => "integer",
            "flag" => "boolean",
        };
        assert_eq!(params["count"], ParamType::Int);
        assert_eq!(params["flag"], ParamType::Bool);
    }
}
