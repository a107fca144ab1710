//! Hook implementations for the user management plugin.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

use hookflow_plugin::prelude::*;

use crate::plugin::PLUGIN_NAME;

/// Fields trimmed by [`FilterUserDataHook`].
const TRIMMED_FIELDS: [&str; 3] = ["name", "email", "username"];

/// Action fired before a new user is created.
#[derive(Debug)]
pub struct BeforeUserCreatedHook {
    descriptor: HookDescriptor,
    invocations: AtomicUsize,
}

impl BeforeUserCreatedHook {
    pub const IDENTIFIER: &'static str = "user_created";

    pub fn new() -> Self {
        let descriptor = HookDescriptor::action(
            Self::IDENTIFIER,
            PLUGIN_NAME,
            "Triggered before a new user is created in the system. Use this hook to perform \
             validation, modify user data, or integrate with external systems.",
        )
        .with_parameters(hook_params! {
            "userData" => "array",
            "context" => "string",
        })
        .with_trigger_point("UserController@store");

        Self {
            descriptor,
            invocations: AtomicUsize::new(0),
        }
    }

    /// How many times the hook has run.
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::Relaxed)
    }
}

impl Default for BeforeUserCreatedHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for BeforeUserCreatedHook {
    fn descriptor(&self) -> &HookDescriptor {
        &self.descriptor
    }

    fn execute(&self, args: &HookArgs) -> Result<(), HookError> {
        self.invocations.fetch_add(1, Ordering::Relaxed);

        let data = args.get_json("userData").cloned().unwrap_or(Value::Null);
        info!(
            identifier = %Self::IDENTIFIER,
            context = args.get_str("context").unwrap_or_default(),
            data = %data,
            "User creation initiated"
        );
        Ok(())
    }
}

/// Filter that normalizes user data before it is saved.
///
/// Trims `name`, `email` and `username`, lowercases `email`, and stamps new
/// users with `created_at` and a `pending` status.
#[derive(Debug, Clone)]
pub struct FilterUserDataHook {
    descriptor: HookDescriptor,
}

impl FilterUserDataHook {
    pub const IDENTIFIER: &'static str = "filter_user_data";

    pub fn new() -> Self {
        let descriptor = HookDescriptor::filter(
            Self::IDENTIFIER,
            PLUGIN_NAME,
            "Filters user data before it is saved to the database. Use this hook to modify, \
             sanitize, or enrich user data.",
        )
        .with_parameters(hook_params! {
            "userData" => "array",
            "isNewUser" => "bool",
        })
        .with_trigger_point("UserRepository@save");

        Self { descriptor }
    }

    fn normalize(&self, mut user: Map<String, Value>, is_new: bool) -> Map<String, Value> {
        for field in TRIMMED_FIELDS {
            if let Some(Value::String(s)) = user.get_mut(field) {
                *s = s.trim().to_string();
            }
        }

        if let Some(Value::String(email)) = user.get_mut("email") {
            *email = email.to_lowercase();
        }

        if is_new {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            user.insert("created_at".to_string(), Value::String(now));
            user.insert("status".to_string(), Value::String("pending".to_string()));
        }

        user
    }
}

impl Default for FilterUserDataHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for FilterUserDataHook {
    fn descriptor(&self) -> &HookDescriptor {
        &self.descriptor
    }

    fn apply(&self, value: HookValue, args: &HookArgs) -> Result<HookValue, HookError> {
        // An empty chain value falls back to the userData argument.
        let value = match value {
            HookValue::Json(Value::Null) => args.get("userData").cloned().unwrap_or_default(),
            other => other,
        };

        let user = match value.into_json() {
            Some(Value::Object(map)) => map,
            _ => {
                return Err(HookError::body(
                    Self::IDENTIFIER,
                    "user data must be an object",
                ));
            }
        };

        let is_new = args.get_bool("isNewUser").unwrap_or(false);
        Ok(HookValue::Json(Value::Object(self.normalize(user, is_new))))
    }

    fn validate(&self) -> Vec<String> {
        let d = self.descriptor();
        let mut issues = Vec::new();

        if d.description.is_empty() {
            issues.push("Hook description cannot be empty".to_string());
        }
        if d.plugin.is_empty() {
            issues.push("Hook plugin cannot be empty".to_string());
        }
        if d.parameters.is_empty() {
            issues.push("Hook must accept at least one argument".to_string());
        }

        issues
    }
}
