//! Brand color values.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());

static RGBA_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgba?\([\d\s,%.]+\)$").unwrap());

/// A color as written in the configuration.
///
/// Any string is accepted. Hex and `rgb()`/`rgba()` values are recognized so
/// the rendering layer can treat them specially; everything else (CSS
/// variable references, named colors, `hsl()`) is kept verbatim as
/// [`Color::Opaque`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// `#RGB` or `#RRGGBB`.
    Hex(String),
    /// `rgb(...)` or `rgba(...)`.
    Rgba(String),
    /// Anything else.
    Opaque(String),
}

impl Color {
    /// Classify a color string.
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if HEX_COLOR.is_match(&value) {
            Self::Hex(value)
        } else if RGBA_COLOR.is_match(&value) {
            Self::Rgba(value)
        } else {
            Self::Opaque(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Hex(s) | Self::Rgba(s) | Self::Opaque(s) => s,
        }
    }

    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Hex(s) | Color::Rgba(s) | Color::Opaque(s) => s,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hex() {
        assert_eq!(Color::parse("#7DF9FF"), Color::Hex("#7DF9FF".into()));
        assert_eq!(Color::parse("#fff"), Color::Hex("#fff".into()));
        // 4 and 5 digit forms are not hex colors
        assert!(Color::parse("#ffff").is_opaque());
    }

    #[test]
    fn test_classify_rgba() {
        assert!(matches!(
            Color::parse("rgba(245, 245, 245, 0.7)"),
            Color::Rgba(_)
        ));
        assert!(matches!(Color::parse("rgb(10%, 20%, 30%)"), Color::Rgba(_)));
    }

    #[test]
    fn test_opaque_fallback_keeps_value() {
        let color = Color::parse("var(--color-primary)");
        assert!(color.is_opaque());
        assert_eq!(color.as_str(), "var(--color-primary)");
    }

    #[test]
    fn test_serde_is_plain_string() {
        let color: Color = serde_json::from_str("\"#0A0A0A\"").unwrap();
        assert_eq!(color, Color::Hex("#0A0A0A".into()));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#0A0A0A\"");
    }
}
