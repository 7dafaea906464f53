//! `brand` section: name, logo, palette and type scale.

use crate::config::Color;
use crate::config::schema::{Format, Rule, Schema, nested, object, record, string};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSection {
    pub name: String,
    pub full_name: String,
    pub logo: Logo,
    pub colors: BrandColors,
    pub typography: BrandTypography,
}

impl Schema for BrandSection {
    fn schema() -> Rule {
        object()
            .required("name", string().min_len(1))
            .required("fullName", string())
            .required("logo", nested::<Logo>())
            .required("colors", nested::<BrandColors>())
            .required("typography", nested::<BrandTypography>())
            .into()
    }
}

// ============================================================================
// logo
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Schema for Logo {
    fn schema() -> Rule {
        let path = || string().format(Format::Link);
        object()
            .required("primary", path())
            .optional("light", path())
            .optional("dark", path())
            .optional("icon", path())
            .into()
    }
}

// ============================================================================
// colors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: BackgroundColors,
    pub text: TextColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
}

fn color() -> Rule {
    string().format(Format::Color).into()
}

impl Schema for BrandColors {
    fn schema() -> Rule {
        object()
            .required("primary", color())
            .required("secondary", color())
            .required("accent", color())
            .required(
                "background",
                object()
                    .required("primary", color())
                    .required("secondary", color())
                    .optional("tertiary", color()),
            )
            .required(
                "text",
                object()
                    .required("primary", color())
                    .required("secondary", color())
                    .required("muted", color()),
            )
            .optional("success", color())
            .optional("warning", color())
            .optional("error", color())
            .optional("info", color())
            .into()
    }
}

// ============================================================================
// typography
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTypography {
    pub font_family: BrandFonts,
    /// Named type sizes, usually `clamp()` expressions.
    pub scale: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandFonts {
    pub heading: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Schema for BrandTypography {
    fn schema() -> Rule {
        object()
            .required(
                "fontFamily",
                object()
                    .required("heading", string())
                    .required("body", string())
                    .optional("accent", string()),
            )
            .required("scale", record(string()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    fn colors() -> serde_json::Value {
        json!({
            "primary": "#7DF9FF",
            "secondary": "#9DFBFF",
            "accent": "var(--accent)",
            "background": { "primary": "#0A0A0A", "secondary": "#1A1A1A" },
            "text": {
                "primary": "#F5F5F5",
                "secondary": "rgba(245, 245, 245, 0.7)",
                "muted": "rgba(245, 245, 245, 0.4)"
            }
        })
    }

    #[test]
    fn test_colors_are_classified() {
        let colors: BrandColors = test_parse_section(colors());
        assert!(matches!(colors.primary, Color::Hex(_)));
        assert!(matches!(colors.text.secondary, Color::Rgba(_)));
        assert!(colors.accent.is_opaque());
        assert_eq!(colors.background.tertiary, None);
        assert_eq!(colors.success, None);
    }

    #[test]
    fn test_color_must_be_string() {
        let mut value = colors();
        value["background"]["primary"] = json!(10);
        let diag = BrandColors::schema().check_root(&value);
        assert_eq!(diag.errors()[0].field.as_str(), "background.primary");
        assert_eq!(
            diag.errors()[0].message,
            "Expected string, received number"
        );
    }

    #[test]
    fn test_logo_paths() {
        let diag = Logo::schema().check_root(&json!({
            "primary": "/images/logo.svg",
            "icon": "images/icon.svg"
        }));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "icon");
    }

    #[test]
    fn test_type_scale_is_free_form() {
        let typography: BrandTypography = test_parse_section(json!({
            "fontFamily": { "heading": "Oswald", "body": "Inter" },
            "scale": { "hero": "clamp(3.5rem, 2rem + 7.5vw, 8rem)", "2xl": "2rem" }
        }));
        assert_eq!(typography.scale.len(), 2);
        assert_eq!(typography.scale["2xl"], "2rem");
        assert_eq!(typography.font_family.accent, None);
    }
}
