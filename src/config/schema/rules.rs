//! Rule builders.

use super::{Format, Rule, Schema, expected};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde_json::Value;

// ============================================================================
// builders
// ============================================================================

pub fn string() -> StringRule {
    StringRule::default()
}

pub fn number() -> NumberRule {
    NumberRule::default()
}

pub fn boolean() -> Rule {
    Rule::Bool
}

pub fn one_of(names: &'static [&'static str]) -> Rule {
    Rule::Enum(names)
}

pub fn array(item: impl Into<Rule>) -> ArrayRule {
    ArrayRule {
        item: item.into(),
        min: None,
        max: None,
    }
}

pub fn object() -> ObjectRule {
    ObjectRule::default()
}

pub fn record(item: impl Into<Rule>) -> Rule {
    Rule::Record(Box::new(item.into()))
}

pub fn union(arms: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::Union(arms.into_iter().collect())
}

/// Rule of a type implementing [`Schema`].
pub fn nested<T: Schema>() -> Rule {
    T::schema()
}

// ============================================================================
// string
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StringRule {
    min_len: Option<usize>,
    max_len: Option<(usize, &'static str)>,
    format: Option<Format>,
}

impl StringRule {
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Maximum length with a custom violation message.
    pub fn max_len(mut self, len: usize, message: &'static str) -> Self {
        self.max_len = Some((len, message));
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub(super) fn check(&self, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let Some(s) = value.as_str() else {
            expected(diag, path, "string", value);
            return;
        };
        // UTF-16 code units, the length the site's JavaScript runtime sees.
        let len = s.encode_utf16().count();

        if let Some(min) = self.min_len
            && len < min
        {
            diag.error(
                path.clone(),
                format!("String must contain at least {min} character(s)"),
            );
        }
        if let Some((max, message)) = self.max_len
            && len > max
        {
            diag.error(path.clone(), message);
        }
        if let Some(format) = self.format
            && let Some(message) = format.check(s)
        {
            diag.error(path.clone(), message);
        }
    }
}

impl From<StringRule> for Rule {
    fn from(rule: StringRule) -> Self {
        Self::String(rule)
    }
}

// ============================================================================
// number
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRule {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRule {
    /// Closed interval `[min, max]`.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub(super) fn check(&self, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let Some(n) = value.as_f64() else {
            expected(diag, path, "number", value);
            return;
        };

        if let Some(min) = self.min
            && n < min
        {
            diag.error(
                path.clone(),
                format!("Number must be greater than or equal to {min}"),
            );
        }
        if let Some(max) = self.max
            && n > max
        {
            diag.error(
                path.clone(),
                format!("Number must be less than or equal to {max}"),
            );
        }
    }
}

impl From<NumberRule> for Rule {
    fn from(rule: NumberRule) -> Self {
        Self::Number(rule)
    }
}

// ============================================================================
// array
// ============================================================================

#[derive(Debug, Clone)]
pub struct ArrayRule {
    item: Rule,
    min: Option<usize>,
    max: Option<usize>,
}

impl ArrayRule {
    pub fn min_items(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub(super) fn check(&self, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let Some(items) = value.as_array() else {
            expected(diag, path, "array", value);
            return;
        };

        if let Some(min) = self.min
            && items.len() < min
        {
            diag.error(
                path.clone(),
                format!("Array must contain at least {min} element(s)"),
            );
        }
        if let Some(max) = self.max
            && items.len() > max
        {
            diag.error_with_hint(
                path.clone(),
                format!("Array must contain at most {max} element(s)"),
                format!("found {} entries, remove {}", items.len(), items.len() - max),
            );
        }

        for (i, item) in items.iter().enumerate() {
            self.item.check(item, &path.index(i), diag);
        }
    }
}

impl From<ArrayRule> for Rule {
    fn from(rule: ArrayRule) -> Self {
        Self::Array(Box::new(rule))
    }
}

// ============================================================================
// object
// ============================================================================

/// How a missing object field is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing is an error.
    Required,
    /// May be missing; deserializes to `None`. An explicit `null` is rejected.
    Optional,
    /// May be missing; the typed struct fills in its default.
    Defaulted,
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub rule: Rule,
    pub presence: Presence,
}

#[derive(Debug, Clone, Default)]
pub struct ObjectRule {
    fields: Vec<FieldRule>,
}

impl ObjectRule {
    pub fn required(self, name: &'static str, rule: impl Into<Rule>) -> Self {
        self.field(name, rule, Presence::Required)
    }

    pub fn optional(self, name: &'static str, rule: impl Into<Rule>) -> Self {
        self.field(name, rule, Presence::Optional)
    }

    pub fn defaulted(self, name: &'static str, rule: impl Into<Rule>) -> Self {
        self.field(name, rule, Presence::Defaulted)
    }

    fn field(mut self, name: &'static str, rule: impl Into<Rule>, presence: Presence) -> Self {
        self.fields.push(FieldRule {
            name,
            rule: rule.into(),
            presence,
        });
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// All fields become optional; nested rules are untouched.
    pub fn partial(mut self) -> Self {
        for field in &mut self.fields {
            field.presence = Presence::Optional;
        }
        self
    }

    pub(super) fn check(&self, value: &Value, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let Some(map) = value.as_object() else {
            expected(diag, path, "object", value);
            return;
        };

        for field in &self.fields {
            let at = path.key(field.name);
            match (map.get(field.name), field.presence) {
                (None, Presence::Required) => diag.error(at, "Required"),
                (None, _) => {}
                (Some(child), _) => field.rule.check(child, &at, diag),
            }
        }

        // Unknown keys are dropped by deserialization; surface them as warnings.
        for key in map.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                diag.warn(path.key(key), "unknown field");
            }
        }
    }
}

impl From<ObjectRule> for Rule {
    fn from(rule: ObjectRule) -> Self {
        Self::Object(rule)
    }
}
