//! Static validation rules for hook declarations.
//!
//! Everything here is pure: the same descriptor always yields the same
//! issue list, and nothing about call-time arguments is inspected.

use std::sync::OnceLock;

use regex::Regex;

use super::hook::HookDescriptor;

static IDENTIFIER_RE: OnceLock<Option<Regex>> = OnceLock::new();
static PARAMETER_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Returns whether `identifier` is a well-formed hook identifier.
///
/// Letters, digits, underscores, hyphens and backslashes, not starting with
/// a digit, hyphen or backslash.
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\\\-]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(identifier))
}

/// Returns whether `name` is a well-formed parameter name.
pub fn is_valid_parameter_name(name: &str) -> bool {
    PARAMETER_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Validates a descriptor, returning every issue in rule order.
pub fn validate(descriptor: &HookDescriptor) -> Vec<String> {
    let mut issues = Vec::new();

    if descriptor.identifier.is_empty() {
        issues.push("Hook identifier cannot be empty".to_string());
    } else if !is_valid_identifier(&descriptor.identifier) {
        issues.push(
            "Hook identifier should only contain letters, numbers, underscores, backslashes, and hyphens"
                .to_string(),
        );
    }

    if descriptor.description.is_empty() {
        issues.push("Hook description cannot be empty".to_string());
    }

    if descriptor.plugin.is_empty() {
        issues.push("Hook plugin cannot be empty".to_string());
    }

    for (name, ty) in &descriptor.parameters {
        if name.is_empty() {
            issues.push("Parameter name cannot be empty".to_string());
        }
        if ty.is_blank() {
            issues.push(format!("Parameter '{name}' has no type specified"));
        }
        if !is_valid_parameter_name(name) {
            issues.push(format!("Invalid parameter name '{name}'"));
        }
    }

    if descriptor.priority < 1 {
        issues.push("Hook priority must be greater than 0".to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> HookDescriptor {
        HookDescriptor::action("test-hook", "test-plugin", "Test hook for testing purposes")
            .with_param("param1", "string")
            .with_param("param2", "int")
            .with_trigger_point("test@test:before")
    }

    #[test]
    fn test_valid_descriptor_has_no_issues() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_identifier_character_rule() {
        assert!(is_valid_identifier("user_created"));
        assert!(is_valid_identifier("filter-user-data"));
        assert!(is_valid_identifier("Examples\\UserHooks\\BeforeUserCreatedHook"));
        assert!(is_valid_identifier("_private"));
        assert!(!is_valid_identifier("1starts_with_digit"));
        assert!(!is_valid_identifier("-leading-hyphen"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("dot.separated"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_invalid_identifier_message() {
        let mut d = valid();
        d.identifier = "invalid identifier!".to_string();
        assert_eq!(
            validate(&d),
            vec![
                "Hook identifier should only contain letters, numbers, underscores, backslashes, and hyphens"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_empty_identifier_skips_character_rule() {
        let mut d = valid();
        d.identifier = String::new();
        assert_eq!(validate(&d), vec!["Hook identifier cannot be empty".to_string()]);
    }

    #[test]
    fn test_whitespace_type_tag_counts_as_declared() {
        let d = valid().with_param("spaced", " ");
        assert!(validate(&d).is_empty());
    }

    #[test]
    fn test_parameter_rules() {
        let d = valid()
            .with_param("", "string")
            .with_param("untyped", "")
            .with_param("bad-name", "int");
        let issues = validate(&d);
        assert_eq!(
            issues,
            vec![
                "Parameter name cannot be empty".to_string(),
                "Invalid parameter name ''".to_string(),
                "Parameter 'untyped' has no type specified".to_string(),
                "Invalid parameter name 'bad-name'".to_string(),
            ]
        );
    }

    #[test]
    fn test_priority_must_be_positive() {
        let d = valid().with_priority(0);
        assert_eq!(validate(&d), vec!["Hook priority must be greater than 0".to_string()]);
        assert!(validate(&valid().with_priority(1)).is_empty());
    }

    #[test]
    fn test_empty_parameters_are_allowed() {
        let d = HookDescriptor::filter("no_params", "p", "d");
        assert!(validate(&d).is_empty());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let mut d = valid().with_priority(-3);
        d.plugin = String::new();
        assert_eq!(validate(&d), validate(&d));
        assert_eq!(validate(&d).len(), 2);
    }
}
