//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dot-separated path to a value inside the site configuration.
///
/// Array elements are addressed by index, so the third event's title is
/// `events.items.2.title`. The empty path refers to the document root.
///
/// # Example
///
/// ```
/// use apex::config::FieldPath;
///
/// let path = FieldPath::root().key("stats").key("items").index(6);
/// assert_eq!(path.as_str(), "stats.items.6");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Path to a named child of this path.
    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Path to an array element of this path.
    pub fn index(&self, index: usize) -> Self {
        if self.0.is_empty() {
            Self(index.to_string())
        } else {
            Self(format!("{}.{}", self.0, index))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this path equals `prefix` or lies underneath it.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0 == prefix
            || self
                .0
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_empty() { "<root>" } else { &self.0 };
        write!(f, "{}", format_args!("`{}`", shown).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
