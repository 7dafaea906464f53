//! `newsletter` section: email capture and its extra trigger points.
//!
//! # Example
//!
//! ```toml
//! [newsletter]
//! headline = "Join The Movement"
//! successMessage = "You're in!"
//! provider = "convertkit"
//!
//! [newsletter.exitIntent]
//! delay = 3000          # ms, default
//! headline = "Wait! Before you go..."
//!
//! [newsletter.scrollTrigger]
//! threshold = 0.5       # share of the page scrolled, default
//! ```

use super::common::default_true;
use crate::config::schema::{Rule, Schema, boolean, nested, number, object, one_of, string};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

literal_enum! {
    pub enum EmailProvider("email provider") {
        ConvertKit => "convertkit",
        Mailchimp => "mailchimp",
        Custom => "custom",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_button_text")]
    pub button_text: String,
    pub success_message: String,
    pub provider: EmailProvider,
    /// Provider-specific form id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_intent: Option<ExitIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTrigger>,
}

fn default_placeholder() -> String {
    "Enter your email".to_string()
}

fn default_button_text() -> String {
    "Subscribe".to_string()
}

impl Schema for NewsletterSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required("headline", string())
            .optional("subheadline", string())
            .defaulted("placeholder", string())
            .defaulted("buttonText", string())
            .required("successMessage", string())
            .required("provider", one_of(EmailProvider::NAMES))
            .optional("formId", string())
            .optional("exitIntent", nested::<ExitIntent>())
            .optional("scrollTrigger", nested::<ScrollTrigger>())
            .into()
    }
}

/// Popup shown when the pointer leaves the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitIntent {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Milliseconds before the popup may show.
    #[serde(default = "default_delay")]
    pub delay: f64,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
}

fn default_delay() -> f64 {
    3000.0
}

impl Schema for ExitIntent {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .defaulted("delay", number())
            .required("headline", string())
            .optional("offer", string())
            .into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTrigger {
    pub enabled: bool,
    /// Share of the page scrolled before the form shows.
    pub threshold: f64,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.5,
        }
    }
}

impl Schema for ScrollTrigger {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .defaulted("threshold", number().range(0.0, 1.0))
            .into()
    }
}
