//! Shapes shared by several sections.

use crate::config::schema::{Rule, Schema, object, one_of, string};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

pub(crate) fn default_true() -> bool {
    true
}

literal_enum! {
    /// Visual weight of a call-to-action button.
    #[derive(Default)]
    pub enum CtaVariant("CTA variant") {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
        Ghost => "ghost",
    }
}

/// Call-to-action button, used by navigation, hero and about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub variant: CtaVariant,
}

impl Cta {
    pub fn new(label: impl Into<String>, href: impl Into<String>, variant: CtaVariant) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            variant,
        }
    }
}

impl Schema for Cta {
    fn schema() -> Rule {
        object()
            .required("label", string().min_len(1))
            .required("href", string())
            .defaulted("variant", one_of(CtaVariant::NAMES))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    #[test]
    fn test_cta_variant_defaults_to_primary() {
        let cta: Cta = test_parse_section(json!({ "label": "Get Tickets", "href": "/events" }));
        assert_eq!(cta.variant, CtaVariant::Primary);
    }

    #[test]
    fn test_cta_rejects_unknown_variant() {
        let diag = Cta::schema().check_root(&json!({
            "label": "Go",
            "href": "/",
            "variant": "fancy"
        }));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "variant");
    }
}
