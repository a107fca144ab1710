//! Validation report over a set of hooks.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::hooks::hook::Hook;

/// A hook that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidHook {
    pub identifier: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A hook that failed validation, with every issue found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidHook {
    pub identifier: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub issues: Vec<String>,
}

/// An identifier claimed by more than one hook type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateHook {
    pub identifier: String,
    pub types: Vec<String>,
}

/// Result of validating a batch of hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: Vec<ValidHook>,
    pub invalid: Vec<InvalidHook>,
    pub duplicates: Vec<DuplicateHook>,
}

impl ValidationReport {
    /// Validates every hook and groups the outcome.
    ///
    /// Duplicates are reported without removing the hooks from `valid`.
    pub fn from_hooks(hooks: &[Arc<dyn Hook>]) -> Self {
        let mut report = Self::default();
        let mut claims: IndexMap<String, Vec<String>> = IndexMap::new();

        for hook in hooks {
            let identifier = hook.identifier().to_string();
            let type_name = hook.type_name().to_string();

            if identifier.is_empty() {
                report.invalid.push(InvalidHook {
                    identifier,
                    type_name,
                    issues: vec!["Hook identifier cannot be empty".to_string()],
                });
                continue;
            }

            let issues = hook.validate();
            if !issues.is_empty() {
                report.invalid.push(InvalidHook {
                    identifier,
                    type_name,
                    issues,
                });
                continue;
            }

            let types = claims.entry(identifier.clone()).or_default();
            if !types.contains(&type_name) {
                types.push(type_name.clone());
            }
            report.valid.push(ValidHook {
                identifier,
                type_name,
            });
        }

        report.duplicates = claims
            .into_iter()
            .filter(|(_, types)| types.len() > 1)
            .map(|(identifier, types)| DuplicateHook { identifier, types })
            .collect();

        report
    }

    /// Copy of the report with duplicated identifiers dropped from `valid`.
    pub fn without_duplicates(&self) -> Self {
        let mut report = self.clone();
        report
            .valid
            .retain(|v| !self.duplicates.iter().any(|d| d.identifier == v.identifier));
        report
    }

    /// True when nothing was checked or at least one hook is valid.
    pub fn is_success(&self) -> bool {
        let found = !self.valid.is_empty() || !self.invalid.is_empty();
        !found || !self.valid.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}
