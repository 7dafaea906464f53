//! `theme` section configuration.
//!
//! Selects the token bundle and the layout variant of each section, and
//! carries animation preferences.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! variant = "luxury-dark"
//!
//! [theme.layouts]
//! hero = "asymmetric"
//! stats = "particle"
//! events = "cardstack"
//! about = "split-reveal"
//!
//! [theme.animations]
//! reducedMotion = false
//! performanceMode = "auto"
//!
//! [theme.spacing]
//! section = "clamp(4rem, 3rem + 5vw, 8rem)"
//! container = "7rem"
//! gutter = "1.5rem"
//!
//! [theme.borderRadius]
//! sm = "0.375rem"
//! ```

mod layouts;

pub use layouts::{AboutLayout, EventsLayout, HeroLayout, Layouts, StatsLayout};

use crate::config::schema::{Rule, Schema, boolean, nested, object, one_of, record, string};
use crate::config::types::literal_enum;
use crate::theme::ThemeVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSection {
    pub variant: ThemeVariant,
    pub layouts: Layouts,
    pub animations: Animations,
    pub spacing: ThemeSpacing,
    pub border_radius: BTreeMap<String, String>,
}

impl Schema for ThemeSection {
    fn schema() -> Rule {
        object()
            .required("variant", one_of(ThemeVariant::NAMES))
            .required("layouts", nested::<Layouts>())
            .required("animations", nested::<Animations>())
            .required(
                "spacing",
                object()
                    .required("section", string())
                    .required("container", string())
                    .required("gutter", string()),
            )
            .required("borderRadius", record(string()))
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSpacing {
    pub section: String,
    pub container: String,
    pub gutter: String,
}

// ============================================================================
// animations
// ============================================================================

literal_enum! {
    #[derive(Default)]
    pub enum PerformanceMode("performance mode") {
        #[default]
        Auto => "auto",
        High => "high",
        Low => "low",
    }
}

/// Animation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animations {
    pub enabled: bool,
    /// Honour `prefers-reduced-motion`.
    pub reduced_motion: bool,
    pub page_transitions: bool,
    pub micro_interactions: bool,
    pub particle_effects: bool,
    pub parallax_effects: bool,
    pub performance_mode: PerformanceMode,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            enabled: true,
            reduced_motion: false,
            page_transitions: true,
            micro_interactions: true,
            particle_effects: true,
            parallax_effects: true,
            performance_mode: PerformanceMode::Auto,
        }
    }
}

impl Animations {
    /// Whether motion should play at all.
    pub fn motion_allowed(&self) -> bool {
        self.enabled && !self.reduced_motion
    }
}

impl Schema for Animations {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .defaulted("reducedMotion", boolean())
            .defaulted("pageTransitions", boolean())
            .defaulted("microInteractions", boolean())
            .defaulted("particleEffects", boolean())
            .defaulted("parallaxEffects", boolean())
            .defaulted("performanceMode", one_of(PerformanceMode::NAMES))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    #[test]
    fn test_animation_defaults() {
        let animations: Animations = test_parse_section(json!({}));
        assert_eq!(animations, Animations::default());
        assert!(animations.enabled);
        assert!(!animations.reduced_motion);
        assert_eq!(animations.performance_mode, PerformanceMode::Auto);
    }

    #[test]
    fn test_reduced_motion_disables_motion() {
        let animations: Animations = test_parse_section(json!({ "reducedMotion": true }));
        assert!(!animations.motion_allowed());
    }

    #[test]
    fn test_unknown_theme_variant() {
        let diag = ThemeSection::schema().check_root(&json!({
            "variant": "neon",
            "layouts": {
                "hero": "asymmetric",
                "stats": "particle",
                "events": "cardstack",
                "about": "parallax"
            },
            "animations": {},
            "spacing": { "section": "8rem", "container": "7rem", "gutter": "1.5rem" },
            "borderRadius": {}
        }));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "variant");
        assert!(diag.errors()[0].message.contains("'bold-contrast'"));
    }

    #[test]
    fn test_layouts_are_required() {
        let diag = ThemeSection::schema().check_root(&json!({
            "variant": "custom",
            "layouts": { "hero": "editorial" },
            "animations": {},
            "spacing": { "section": "8rem", "container": "7rem", "gutter": "1.5rem" },
            "borderRadius": {}
        }));
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["layouts.stats", "layouts.events", "layouts.about"]
        );
    }
}
