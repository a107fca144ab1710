//! Hook dispatch command.

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use hookflow_core::config::AppConfig;
use hookflow_core::error::AppError;
use hookflow_plugin::{HookArgs, HookValue};

use crate::output::{self, OutputFormat};

/// Arguments for the fire command
#[derive(Debug, Args)]
pub struct FireArgs {
    /// Hook identifier to dispatch
    pub identifier: String,

    /// Arguments as a JSON object; the `value` key seeds filter chains
    #[arg(short, long, default_value = "{}")]
    pub args: String,
}

/// Result of a dispatch, as printed in JSON mode
#[derive(Debug, Serialize)]
struct FireResult<'a> {
    identifier: &'a str,
    result: Option<HookValue>,
}

/// Execute the fire command
pub async fn execute(args: &FireArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let hook_args = parse_args(&args.args)?;
    let registry = super::load_registry(config)?;

    let result = registry.execute(&args.identifier, &hook_args)?;

    match format {
        OutputFormat::Json => output::print_json(&FireResult {
            identifier: &args.identifier,
            result,
        }),
        OutputFormat::Table => {
            output::print_success(&format!("Hook '{}' dispatched", args.identifier));
            if let Some(value) = result {
                output::print_json(&value);
            }
        }
    }

    Ok(())
}

fn parse_args(raw: &str) -> Result<HookArgs, AppError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(HookArgs::from(map)),
        other => Err(AppError::invalid_argument(format!(
            "Hook arguments must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use hookflow_core::error::ErrorKind;

    #[test]
    fn test_parse_args_keeps_order() {
        let args = parse_args(r#"{"userData": {"name": "Ann"}, "context": "cli"}"#).unwrap();
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["userData", "context"]);
    }

    #[test]
    fn test_parse_args_rejects_non_objects() {
        let err = parse_args("[1, 2]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);

        let err = parse_args("{not json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_fire_unknown_hook_is_not_found() {
        let args = FireArgs {
            identifier: "missing_hook".to_string(),
            args: "{}".to_string(),
        };
        let err = execute(&args, &AppConfig::default(), OutputFormat::Json)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_fire_filter_hook() {
        let raw = json!({
            "userData": {"email": " X@Y.Z "},
            "isNewUser": false,
        })
        .to_string();
        let args = FireArgs {
            identifier: "filter_user_data".to_string(),
            args: raw,
        };
        assert!(execute(&args, &AppConfig::default(), OutputFormat::Json).await.is_ok());
    }
}
