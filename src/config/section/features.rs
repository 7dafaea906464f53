//! `features` section: page, component and functionality toggles.

use crate::config::schema::{Rule, Schema, boolean, nested, object};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesSection {
    pub pages: FeaturePages,
    pub components: FeatureComponents,
    pub functionality: FeatureFunctionality,
}

impl Schema for FeaturesSection {
    fn schema() -> Rule {
        object()
            .required("pages", nested::<FeaturePages>())
            .required("components", nested::<FeatureComponents>())
            .required("functionality", nested::<FeatureFunctionality>())
            .into()
    }
}

/// Build an all-defaulted boolean object rule.
fn toggles(names: &[&'static str]) -> Rule {
    names
        .iter()
        .fold(object(), |rule, &name| rule.defaulted(name, boolean()))
        .into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturePages {
    pub legacy: bool,
    pub events: bool,
    pub media: bool,
    pub partners: bool,
    pub contact: bool,
    pub blog: bool,
    pub shop: bool,
}

impl Default for FeaturePages {
    fn default() -> Self {
        Self {
            legacy: true,
            events: true,
            media: true,
            partners: true,
            contact: true,
            blog: false,
            shop: false,
        }
    }
}

impl Schema for FeaturePages {
    fn schema() -> Rule {
        toggles(&[
            "legacy", "events", "media", "partners", "contact", "blog", "shop",
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureComponents {
    pub stats_section: bool,
    pub events_spotlight: bool,
    pub sponsor_bar: bool,
    pub press_bar: bool,
    pub newsletter: bool,
    pub social_proof: bool,
    pub testimonials: bool,
}

impl Default for FeatureComponents {
    fn default() -> Self {
        Self {
            stats_section: true,
            events_spotlight: true,
            sponsor_bar: true,
            press_bar: true,
            newsletter: true,
            social_proof: true,
            testimonials: false,
        }
    }
}

impl Schema for FeatureComponents {
    fn schema() -> Rule {
        toggles(&[
            "statsSection",
            "eventsSpotlight",
            "sponsorBar",
            "pressBar",
            "newsletter",
            "socialProof",
            "testimonials",
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFunctionality {
    pub ticket_sales: bool,
    pub ecommerce: bool,
    pub member_area: bool,
    pub blog: bool,
    pub analytics: bool,
    pub chat_widget: bool,
}

impl Default for FeatureFunctionality {
    fn default() -> Self {
        Self {
            ticket_sales: true,
            ecommerce: false,
            member_area: false,
            blog: false,
            analytics: true,
            chat_widget: false,
        }
    }
}

impl Schema for FeatureFunctionality {
    fn schema() -> Rule {
        toggles(&[
            "ticketSales",
            "ecommerce",
            "memberArea",
            "blog",
            "analytics",
            "chatWidget",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    #[test]
    fn test_feature_defaults() {
        let features: FeaturesSection = test_parse_section(json!({
            "pages": {},
            "components": {},
            "functionality": {}
        }));
        assert_eq!(features, FeaturesSection::default());
        assert!(features.pages.legacy && !features.pages.blog && !features.pages.shop);
        assert!(!features.components.testimonials);
        assert!(features.functionality.ticket_sales && features.functionality.analytics);
        assert!(!features.functionality.chat_widget);
    }

    #[test]
    fn test_groups_are_required() {
        let diag = FeaturesSection::schema().check_root(&json!({ "pages": {} }));
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["components", "functionality"]);
    }

    #[test]
    fn test_toggle_must_be_bool() {
        let diag = FeaturePages::schema().check_root(&json!({ "shop": "yes" }));
        assert_eq!(diag.errors()[0].message, "Expected boolean, received string");
    }
}
