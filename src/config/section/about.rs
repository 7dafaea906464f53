//! `about` section: the legacy/bio block.

use super::common::{Cta, default_true};
use crate::config::schema::{Format, Rule, Schema, array, boolean, nested, object, string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub headline: AboutHeadline,
    /// Paragraphs, in order.
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AboutImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutHeadline {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutImage {
    pub src: String,
    pub alt: String,
}

impl Schema for AboutSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required(
                "headline",
                object()
                    .required("line1", string())
                    .optional("line2", string()),
            )
            .required("content", array(string()))
            .optional("cta", nested::<Cta>())
            .optional(
                "image",
                object()
                    .required("src", string().format(Format::Link))
                    .required("alt", string()),
            )
            .into()
    }
}
