//! `sponsors` and `press` sections: partner logos and media mentions.

use super::common::default_true;
use crate::config::schema::{Format, Rule, Schema, array, boolean, object, one_of, string};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

literal_enum! {
    /// How sponsor logos are laid out.
    #[derive(Default)]
    pub enum SponsorStyle("sponsor style") {
        #[default]
        Carousel => "carousel",
        Grid => "grid",
        Marquee => "marquee",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub headline: String,
    pub logos: Vec<SponsorLogo>,
    #[serde(default)]
    pub style: SponsorStyle,
    /// Grayscale until hovered.
    #[serde(default = "default_true")]
    pub grayscale: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorLogo {
    pub name: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl SponsorLogo {
    pub fn new(name: impl Into<String>, src: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
            href: href.map(str::to_string),
        }
    }
}

impl Schema for SponsorsSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required("headline", string())
            .required(
                "logos",
                array(
                    object()
                        .required("name", string().min_len(1))
                        .required("src", string().format(Format::Link))
                        .optional("href", string()),
                ),
            )
            .defaulted("style", one_of(SponsorStyle::NAMES))
            .defaulted("grayscale", boolean())
            .into()
    }
}

// ============================================================================
// press
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub headline: String,
    pub outlets: Vec<PressOutlet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressOutlet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl PressOutlet {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: Some(logo.into()),
        }
    }
}

impl Schema for PressSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required("headline", string())
            .required(
                "outlets",
                array(
                    object()
                        .required("name", string())
                        .optional("logo", string().format(Format::Link)),
                ),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    #[test]
    fn test_sponsor_defaults() {
        let sponsors: SponsorsSection = test_parse_section(json!({
            "headline": "Proudly Partnered With",
            "logos": [{ "name": "Wooter Apparel", "src": "/images/sponsors/wooter.svg", "href": "#" }]
        }));
        assert_eq!(sponsors.style, SponsorStyle::Carousel);
        assert!(sponsors.grayscale && sponsors.enabled);
        assert_eq!(sponsors.logos[0].href.as_deref(), Some("#"));
    }

    #[test]
    fn test_sponsor_style_set() {
        let diag = SponsorsSection::schema().check_root(&json!({
            "headline": "Partners",
            "logos": [],
            "style": "slideshow"
        }));
        assert_eq!(diag.errors()[0].field.as_str(), "style");
        assert_eq!(
            diag.errors()[0].message,
            "Invalid enum value. Expected 'carousel' | 'grid' | 'marquee', received 'slideshow'"
        );
    }

    #[test]
    fn test_press_logo_optional() {
        let press: PressSection = test_parse_section(json!({
            "headline": "As Seen In",
            "outlets": [{ "name": "MassLive" }]
        }));
        assert_eq!(press.outlets[0].logo, None);
    }
}
