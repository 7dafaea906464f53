//! Design token types and the bundles shared by every preset.
//!
//! A [`ThemeTokens`] value is a complete, self-contained description of one
//! visual theme. Presets start from [`base_typography`], [`base_spacing`],
//! [`base_animation`] and [`base_border_radius`] and override what differs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered string-keyed token group (font sizes, easings, ...).
pub type TokenMap<V = String> = BTreeMap<String, V>;

/// Full token bundle for one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub animation: AnimationTokens,
    pub shadows: ShadowTokens,
    pub border_radius: BorderRadiusTokens,
}

// ============================================================================
// colors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: BackgroundTokens,
    pub text: TextTokens,
    pub border: BorderTokens,
    pub semantic: SemanticTokens,
    pub gradients: GradientTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTokens {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub elevated: String,
    pub overlay: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTokens {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub inverse: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub default: String,
    pub subtle: String,
    pub strong: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticTokens {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

/// Complete `linear-gradient(...)` expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientTokens {
    pub primary: String,
    pub secondary: String,
    pub hero: String,
    pub cta: String,
}

// ============================================================================
// typography
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: FontFamilyTokens,
    pub font_size: TokenMap,
    pub font_weight: TokenMap<u16>,
    pub line_height: TokenMap<Scalar>,
    pub letter_spacing: TokenMap,
}

/// CSS font stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilyTokens {
    pub heading: String,
    pub body: String,
    pub accent: String,
    pub mono: String,
}

/// A token that is either a bare number or a CSS string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// spacing / animation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    /// Base unit in pixels.
    pub base: f64,
    pub scale: TokenMap,
    pub section: TokenMap,
    pub container: TokenMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub duration: TokenMap,
    pub easing: TokenMap,
    pub transition: TokenMap,
}

// ============================================================================
// shadows / radii
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    pub glow: String,
    pub inner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderRadiusTokens {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    pub full: String,
}

// ============================================================================
// helpers
// ============================================================================

/// Convert a `#RRGGBB` color to `rgba(r, g, b, alpha)`.
///
/// Returns `None` for anything that is not a six-digit hex color.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// Build a `linear-gradient(direction, c1, c2, ...)` expression.
pub fn create_gradient(colors: &[&str], direction: &str) -> String {
    format!("linear-gradient({direction}, {})", colors.join(", "))
}

fn token_map<V, const N: usize>(entries: [(&str, V); N]) -> TokenMap<V> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn strings<const N: usize>(entries: [(&str, &str); N]) -> TokenMap {
    token_map(entries.map(|(key, value)| (key, value.to_string())))
}

// ============================================================================
// base bundles
// ============================================================================

const MONO_STACK: &str = r#""JetBrains Mono", "Fira Code", monospace"#;

pub fn base_typography() -> TypographyTokens {
    TypographyTokens {
        font_family: FontFamilyTokens {
            heading: r#"var(--font-heading, "Inter", "Helvetica Neue", sans-serif)"#.into(),
            body: r#"var(--font-body, "Inter", "Helvetica Neue", sans-serif)"#.into(),
            accent: r#"var(--font-accent, "Space Grotesk", "Helvetica Neue", sans-serif)"#.into(),
            mono: format!("var(--font-mono, {MONO_STACK})"),
        },
        font_size: strings([
            ("xs", "clamp(0.75rem, 0.7rem + 0.25vw, 0.875rem)"),
            ("sm", "clamp(0.875rem, 0.8rem + 0.375vw, 1rem)"),
            ("base", "clamp(1rem, 0.9rem + 0.5vw, 1.125rem)"),
            ("lg", "clamp(1.125rem, 1rem + 0.625vw, 1.25rem)"),
            ("xl", "clamp(1.25rem, 1.1rem + 0.75vw, 1.5rem)"),
            ("2xl", "clamp(1.5rem, 1.25rem + 1.25vw, 2rem)"),
            ("3xl", "clamp(2rem, 1.5rem + 2.5vw, 3rem)"),
            ("4xl", "clamp(2.5rem, 1.75rem + 3.75vw, 4rem)"),
            ("5xl", "clamp(3rem, 2rem + 5vw, 5rem)"),
            ("6xl", "clamp(3.5rem, 2.25rem + 6.25vw, 6rem)"),
            ("hero", "clamp(3.5rem, 2rem + 7.5vw, 8rem)"),
        ]),
        font_weight: token_map([
            ("thin", 100),
            ("extralight", 200),
            ("light", 300),
            ("normal", 400),
            ("medium", 500),
            ("semibold", 600),
            ("bold", 700),
            ("extrabold", 800),
            ("black", 900),
        ]),
        line_height: token_map([
            ("none", Scalar::Number(1.0)),
            ("tight", Scalar::Number(1.1)),
            ("snug", Scalar::Number(1.25)),
            ("normal", Scalar::Number(1.5)),
            ("relaxed", Scalar::Number(1.625)),
            ("loose", Scalar::Number(2.0)),
        ]),
        letter_spacing: strings([
            ("tighter", "-0.05em"),
            ("tight", "-0.025em"),
            ("normal", "0"),
            ("wide", "0.025em"),
            ("wider", "0.05em"),
            ("widest", "0.1em"),
        ]),
    }
}

pub fn base_spacing() -> SpacingTokens {
    SpacingTokens {
        base: 4.0,
        scale: strings([
            ("px", "1px"),
            ("0", "0"),
            ("0.5", "0.125rem"),
            ("1", "0.25rem"),
            ("1.5", "0.375rem"),
            ("2", "0.5rem"),
            ("2.5", "0.625rem"),
            ("3", "0.75rem"),
            ("3.5", "0.875rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("7", "1.75rem"),
            ("8", "2rem"),
            ("9", "2.25rem"),
            ("10", "2.5rem"),
            ("11", "2.75rem"),
            ("12", "3rem"),
            ("14", "3.5rem"),
            ("16", "4rem"),
            ("20", "5rem"),
            ("24", "6rem"),
            ("28", "7rem"),
            ("32", "8rem"),
            ("36", "9rem"),
            ("40", "10rem"),
            ("44", "11rem"),
            ("48", "12rem"),
            ("52", "13rem"),
            ("56", "14rem"),
            ("60", "15rem"),
            ("64", "16rem"),
            ("72", "18rem"),
            ("80", "20rem"),
            ("96", "24rem"),
        ]),
        section: strings([
            ("sm", "clamp(2rem, 1.5rem + 2.5vw, 4rem)"),
            ("md", "clamp(4rem, 3rem + 5vw, 8rem)"),
            ("lg", "clamp(6rem, 4rem + 10vw, 12rem)"),
            ("xl", "clamp(8rem, 5rem + 15vw, 16rem)"),
        ]),
        container: strings([
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
            ("full", "100%"),
        ]),
    }
}

pub fn base_animation() -> AnimationTokens {
    AnimationTokens {
        duration: strings([
            ("instant", "0ms"),
            ("fast", "150ms"),
            ("normal", "300ms"),
            ("slow", "500ms"),
            ("slower", "700ms"),
            ("slowest", "1000ms"),
        ]),
        easing: strings([
            ("linear", "linear"),
            ("easeIn", "cubic-bezier(0.4, 0, 1, 1)"),
            ("easeOut", "cubic-bezier(0, 0, 0.2, 1)"),
            ("easeInOut", "cubic-bezier(0.4, 0, 0.2, 1)"),
            ("spring", "cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
            ("bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
            ("smooth", "cubic-bezier(0.25, 0.1, 0.25, 1)"),
        ]),
        transition: strings([
            ("fast", "150ms ease-out"),
            ("normal", "300ms ease-out"),
            ("slow", "500ms ease-out"),
            ("spring", "500ms cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
            (
                "colors",
                "color 200ms ease, background-color 200ms ease, border-color 200ms ease",
            ),
            ("transform", "transform 300ms cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
            ("all", "all 300ms ease-out"),
        ]),
    }
}

pub fn base_border_radius() -> BorderRadiusTokens {
    BorderRadiusTokens {
        none: "0".into(),
        sm: "0.25rem".into(),
        md: "0.375rem".into(),
        lg: "0.5rem".into(),
        xl: "0.75rem".into(),
        xl2: "1rem".into(),
        full: "9999px".into(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(
            hex_to_rgba("#D4AF37", 0.3).as_deref(),
            Some("rgba(212, 175, 55, 0.3)")
        );
        assert_eq!(
            hex_to_rgba("#000000", 1.0).as_deref(),
            Some("rgba(0, 0, 0, 1)")
        );
    }

    #[test]
    fn test_hex_to_rgba_rejects_other_forms() {
        assert_eq!(hex_to_rgba("D4AF37", 0.5), None);
        assert_eq!(hex_to_rgba("#FFF", 0.5), None);
        assert_eq!(hex_to_rgba("#GGGGGG", 0.5), None);
        assert_eq!(hex_to_rgba("#ÿÿÿ", 0.5), None);
    }

    #[test]
    fn test_create_gradient() {
        assert_eq!(
            create_gradient(&["#D4AF37", "#B8962E"], "to right"),
            "linear-gradient(to right, #D4AF37, #B8962E)"
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Number(1.0).to_string(), "1");
        assert_eq!(Scalar::Number(1.625).to_string(), "1.625");
        assert_eq!(Scalar::Text("normal".into()).to_string(), "normal");
    }

    #[test]
    fn test_base_bundles() {
        let typography = base_typography();
        assert_eq!(typography.font_weight["black"], 900);
        assert_eq!(
            typography.font_size["6xl"],
            "clamp(3.5rem, 2.25rem + 6.25vw, 6rem)"
        );
        assert_eq!(base_spacing().container["2xl"], "1536px");
        assert_eq!(base_animation().duration["slowest"], "1000ms");
        assert_eq!(base_border_radius().full, "9999px");
    }

    #[test]
    fn test_border_radius_serializes_2xl() {
        let value = serde_json::to_value(base_border_radius()).unwrap();
        assert_eq!(value["2xl"], "1rem");
        assert!(value.get("xl2").is_none());
    }
}
