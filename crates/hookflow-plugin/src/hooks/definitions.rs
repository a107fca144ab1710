//! Parameter type tags, hook kinds, and the values passed to hooks.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Declared parameters of a hook: name → type tag, in declaration order.
pub type Parameters = IndexMap<String, ParamType>;

/// Shared callable carried as an argument value.
pub type Callback = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Type tag for a declared hook parameter.
///
/// The known tags are checked exactly at dispatch time. Any other tag (a type
/// name such as `App\User`, or `mixed`) is kept verbatim in [`ParamType::Any`]
/// and accepts every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    String,
    Int,
    Bool,
    Float,
    Array,
    Object,
    Callable,
    Null,
    /// Unchecked tag, holding the declared text.
    Any(String),
}

impl ParamType {
    /// Parses a declared type tag. Unknown tags become [`ParamType::Any`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "int" | "integer" => Self::Int,
            "bool" | "boolean" => Self::Bool,
            "float" | "double" => Self::Float,
            "array" => Self::Array,
            "object" => Self::Object,
            "callable" => Self::Callable,
            "null" => Self::Null,
            other => Self::Any(other.to_string()),
        }
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Array => "array",
            Self::Object => "object",
            Self::Callable => "callable",
            Self::Null => "null",
            Self::Any(tag) => tag,
        }
    }

    /// Returns whether no tag text was declared.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Any(tag) if tag.is_empty())
    }

    /// Returns whether `value` satisfies this tag.
    pub fn matches(&self, value: &HookValue) -> bool {
        let json = match value {
            HookValue::Callable(_) => return matches!(self, Self::Callable | Self::Any(_)),
            HookValue::Json(json) => json,
        };

        match self {
            Self::String => json.is_string(),
            Self::Int => json.is_i64() || json.is_u64(),
            Self::Bool => json.is_boolean(),
            Self::Float => json.is_f64(),
            // Associative arrays count as arrays.
            Self::Array => json.is_array() || json.is_object(),
            Self::Object => json.is_object(),
            Self::Callable => false,
            Self::Null => json.is_null(),
            Self::Any(_) => true,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ParamType {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<String> for ParamType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        ty.as_str().to_string()
    }
}

/// Whether a hook performs side effects or transforms a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// Fires a side effect; nothing flows back into the chain.
    #[default]
    Action,
    /// Receives a value and returns the transformed value.
    Filter,
}

impl HookKind {
    /// Returns the display name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Filter => "Filter",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value handed to a hook.
#[derive(Clone)]
pub enum HookValue {
    /// Plain data.
    Json(Value),
    /// A function supplied by the caller.
    Callable(Callback),
}

impl HookValue {
    /// Wraps a closure as a callable value.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Returns the JSON payload, if this is not a callable.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Callable(_) => None,
        }
    }

    /// Consumes the value, returning the JSON payload if present.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Callable(_) => None,
        }
    }

    /// Returns the string payload, if this is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(|v| v.as_str())
    }

    /// Returns whether this is JSON `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Invokes a callable value. Returns `None` for plain data.
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        match self {
            Self::Callable(f) => Some(f(args)),
            Self::Json(_) => None,
        }
    }

    /// Returns the runtime kind name used in argument error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Callable(_) => "callable",
            Self::Json(Value::Null) => "null",
            Self::Json(Value::Bool(_)) => "bool",
            Self::Json(Value::Number(n)) if n.is_f64() => "float",
            Self::Json(Value::Number(_)) => "int",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Array(_)) => "array",
            Self::Json(Value::Object(_)) => "object",
        }
    }
}

impl Default for HookValue {
    fn default() -> Self {
        Self::Json(Value::Null)
    }
}

impl fmt::Debug for HookValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Callable(_) => f.write_str("Callable(<closure>)"),
        }
    }
}

impl PartialEq for HookValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Json(a), Self::Json(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for HookValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json(value) => value.serialize(serializer),
            Self::Callable(_) => serializer.serialize_str("<callable>"),
        }
    }
}

impl From<Value> for HookValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for HookValue {
    fn from(value: &str) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<String> for HookValue {
    fn from(value: String) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i32> for HookValue {
    fn from(value: i32) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i64> for HookValue {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<f64> for HookValue {
    fn from(value: f64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<bool> for HookValue {
    fn from(value: bool) -> Self {
        Self::Json(Value::from(value))
    }
}

/// Named arguments for a dispatch, kept in insertion order.
///
/// Order matters: a filter run through the executor receives the first
/// value as the value to transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookArgs {
    values: IndexMap<String, HookValue>,
}

impl HookArgs {
    /// Creates an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the map.
    pub fn with(mut self, key: &str, value: impl Into<HookValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value. Re-inserting a key keeps its original position.
    pub fn insert(&mut self, key: &str, value: impl Into<HookValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&HookValue> {
        self.values.get(key)
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the first value in insertion order.
    pub fn first(&self) -> Option<&HookValue> {
        self.values.first().map(|(_, v)| v)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HookValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Gets a JSON value by key.
    pub fn get_json(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(HookValue::as_json)
    }

    /// Gets a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_json(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_json(key).and_then(|v| v.as_i64())
    }

    /// Gets an f64 value.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get_json(key).and_then(|v| v.as_f64())
    }

    /// Gets a bool value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_json(key).and_then(|v| v.as_bool())
    }
}

impl From<serde_json::Map<String, Value>> for HookArgs {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, HookValue::Json(v)))
            .collect()
    }
}

impl FromIterator<(String, HookValue)> for HookArgs {
    fn from_iter<I: IntoIterator<Item = (String, HookValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
