//! `navigation` section: header links and call-to-action.

use super::common::{Cta, default_true};
use crate::config::schema::{Format, Rule, Schema, array, boolean, nested, object, string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSection {
    pub main_nav: Vec<NavLink>,
    pub cta_button: Cta,
    #[serde(default = "default_true")]
    pub show_social_links: bool,
    #[serde(default = "default_true")]
    pub sticky: bool,
    /// Transparent over the hero, solid once scrolled.
    #[serde(default = "default_true")]
    pub transparent: bool,
}

impl NavigationSection {
    /// Links to render, in configured order.
    pub fn enabled_links(&self) -> impl Iterator<Item = &NavLink> {
        self.main_nav.iter().filter(|link| link.enabled)
    }
}

impl Schema for NavigationSection {
    fn schema() -> Rule {
        object()
            .required("mainNav", array(nested::<NavLink>()))
            .required("ctaButton", nested::<Cta>())
            .defaulted("showSocialLinks", boolean())
            .defaulted("sticky", boolean())
            .defaulted("transparent", boolean())
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Site-relative target.
    pub href: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            enabled: true,
        }
    }
}

impl Schema for NavLink {
    fn schema() -> Rule {
        object()
            .required("label", string().min_len(1))
            .required("href", string().format(Format::SitePath))
            .defaulted("enabled", boolean())
            .into()
    }
}
