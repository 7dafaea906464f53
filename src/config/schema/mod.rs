//! Declarative validation rules for untyped configuration values.
//!
//! Typed section structs describe their accepted shape through [`Schema`].
//! The resulting [`Rule`] tree is checked against a `serde_json::Value`
//! before deserialization, so every violation is reported (with its field
//! path) instead of stopping at the first one serde would hit.
//!
//! ```text
//! Value ──check──▶ ConfigDiagnostics ──(no errors)──▶ serde_json::from_value
//! ```
//!
//! # Example
//!
//! ```
//! use apex::config::schema::{Rule, array, object, string};
//! use apex::config::{ConfigDiagnostics, FieldPath};
//! use serde_json::json;
//!
//! let rule: Rule = object()
//!     .required("label", string().min_len(1))
//!     .optional("tags", array(string()).max_items(2))
//!     .into();
//!
//! let mut diag = ConfigDiagnostics::new();
//! rule.check(&json!({ "label": "", "tags": ["a", "b", "c"] }), &FieldPath::root(), &mut diag);
//! assert_eq!(diag.len(), 2);
//! ```

mod format;
mod rules;

pub use format::Format;
pub use rules::{
    ArrayRule, FieldRule, NumberRule, ObjectRule, Presence, StringRule, array, boolean, nested,
    number, object, one_of, record, string, union,
};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde_json::Value;

/// Types that describe their accepted configuration shape.
pub trait Schema {
    fn schema() -> Rule;
}

/// A validation rule for one configuration value.
#[derive(Debug, Clone)]
pub enum Rule {
    Bool,
    Number(NumberRule),
    String(StringRule),
    /// One of a closed set of string literals.
    Enum(&'static [&'static str]),
    Array(Box<ArrayRule>),
    Object(ObjectRule),
    /// Object with arbitrary keys whose values all match the inner rule.
    Record(Box<Rule>),
    /// Value must match at least one arm.
    Union(Vec<Rule>),
}

impl Rule {
    /// Check `value`, reporting violations at `path` into `diag`.
    pub fn check(&self, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Bool => {
                if !value.is_boolean() {
                    expected(diag, path, "boolean", value);
                }
            }
            Self::Number(rule) => rule.check(value, path, diag),
            Self::String(rule) => rule.check(value, path, diag),
            Self::Enum(names) => check_enum(names, value, path, diag),
            Self::Array(rule) => rule.check(value, path, diag),
            Self::Object(rule) => rule.check(value, path, diag),
            Self::Record(item) => check_record(item, value, path, diag),
            Self::Union(arms) => check_union(arms, value, path, diag),
        }
    }

    /// Check a whole document and return the collected diagnostics.
    pub fn check_root(&self, value: &Value) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.check(value, &FieldPath::root(), &mut diag);
        diag
    }

    /// Make every field of an object rule optional (shallow).
    ///
    /// Nested objects keep their own required fields.
    pub fn partial(self) -> Self {
        match self {
            Self::Object(rule) => Self::Object(rule.partial()),
            other => other,
        }
    }
}

/// JSON type name used in "Expected X, received Y" messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn expected(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    expected: &str,
    value: &Value,
) {
    diag.error(
        path.clone(),
        format!("Expected {expected}, received {}", type_name(value)),
    );
}

fn quoted_names(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn check_enum(names: &[&str], value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
    match value {
        Value::String(s) if names.contains(&s.as_str()) => {}
        Value::String(s) => diag.error_with_hint(
            path.clone(),
            format!(
                "Invalid enum value. Expected {}, received '{s}'",
                quoted_names(names)
            ),
            format!("use one of: {}", names.join(", ")),
        ),
        other => expected(diag, path, &quoted_names(names), other),
    }
}

fn check_record(item: &Rule, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
    let Some(map) = value.as_object() else {
        expected(diag, path, "object", value);
        return;
    };
    for (key, child) in map {
        item.check(child, &path.key(key), diag);
    }
}

fn check_union(arms: &[Rule], value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
    let matched = arms.iter().any(|arm| {
        let mut scratch = ConfigDiagnostics::new();
        arm.check(value, path, &mut scratch);
        !scratch.has_errors()
    });
    if !matched {
        diag.error(path.clone(), "Invalid input");
    }
}

#[cfg(test)]
mod tests;
