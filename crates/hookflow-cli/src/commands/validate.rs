//! Hook validation command.

use clap::Args;

use hookflow_core::config::AppConfig;
use hookflow_core::error::AppError;
use hookflow_plugin::ValidationReport;

use crate::output::{self, OutputFormat};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Treat duplicate identifiers as a failure
    #[arg(long)]
    pub strict: bool,
}

/// Execute the validate command
pub async fn execute(
    args: &ValidateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hooks = super::enabled_hooks(config);
    let report = ValidationReport::from_hooks(&hooks);

    match format {
        OutputFormat::Json => output::print_json(&report.without_duplicates()),
        OutputFormat::Table if hooks.is_empty() => println!("No hooks registered."),
        OutputFormat::Table => print_report(&report),
    }

    outcome(&report, args.strict)
}

fn outcome(report: &ValidationReport, strict: bool) -> Result<(), AppError> {
    if !report.is_success() {
        return Err(AppError::validation(format!(
            "{} hook(s) failed validation",
            report.invalid.len()
        )));
    }
    if strict && report.has_duplicates() {
        return Err(AppError::validation(format!(
            "{} duplicate hook identifier(s) found",
            report.duplicates.len()
        )));
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    if !report.valid.is_empty() {
        output::print_success("Valid Hooks:");
        for hook in &report.valid {
            output::print_bullet(1, &hook.identifier);
        }
    }

    if !report.invalid.is_empty() {
        output::print_error("Invalid Hooks:");
        for hook in &report.invalid {
            output::print_bullet(1, &format!("{}:", hook.type_name));
            for issue in &hook.issues {
                output::print_bullet(2, issue);
            }
        }
    }

    if !report.duplicates.is_empty() {
        output::print_warning("Duplicate Hook Identifiers:");
        for duplicate in &report.duplicates {
            output::print_bullet(1, &format!("\"{}\" is used by:", duplicate.identifier));
            for type_name in &duplicate.types {
                output::print_bullet(2, type_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use hookflow_core::error::ErrorKind;
    use hookflow_plugin::prelude::*;

    #[derive(Debug)]
    struct OtherUserCreated(HookDescriptor);

    impl Hook for OtherUserCreated {
        fn descriptor(&self) -> &HookDescriptor {
            &self.0
        }
    }

    #[test]
    fn test_catalog_is_valid() {
        let report = ValidationReport::from_hooks(&crate::commands::enabled_hooks(&AppConfig::default()));
        assert_eq!(report.valid.len(), 2);
        assert!(report.invalid.is_empty());
        assert!(outcome(&report, true).is_ok());
    }

    #[test]
    fn test_all_invalid_fails() {
        let broken: Arc<dyn Hook> =
            Arc::new(FnAction::noop(HookDescriptor::action("broken", "", "")));
        let report = ValidationReport::from_hooks(&[broken]);
        let err = outcome(&report, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let mut hooks = plugin_user_management::hooks();
        hooks.push(Arc::new(OtherUserCreated(HookDescriptor::action(
            "user_created",
            "audit",
            "Audits user creation",
        ))));
        let report = ValidationReport::from_hooks(&hooks);

        assert!(report.has_duplicates());
        assert!(outcome(&report, false).is_ok());
        assert!(outcome(&report, true).is_err());
    }
}
