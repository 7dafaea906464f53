//! `hero` section: headline, CTAs, background and social proof.
//!
//! # Example
//!
//! ```toml
//! [hero]
//! subheadline = "Basketball • Events • Lifestyle"
//! ctas = [{ label = "Upcoming Events", href = "/events" }]
//!
//! [hero.headline]
//! line1 = "THE MOVEMENT"
//! line2 = "HAS 5IVE"
//!
//! [hero.background]
//! type = "video"
//! videoUrl = "/videos/hero-bg.mp4"
//! overlayOpacity = 0.7   # default, within [0, 1]
//! ```

use super::common::{Cta, default_true};
use crate::config::schema::{
    Format, Rule, Schema, array, boolean, nested, number, object, one_of, string,
};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub headline: HeroHeadline,
    pub subheadline: String,
    pub ctas: Vec<Cta>,
    pub background: HeroBackground,
    #[serde(default = "default_true")]
    pub scroll_indicator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<SocialProof>,
}

impl Schema for HeroSection {
    fn schema() -> Rule {
        object()
            .required("headline", nested::<HeroHeadline>())
            .required("subheadline", string())
            .required("ctas", array(nested::<Cta>()))
            .required("background", nested::<HeroBackground>())
            .defaulted("scrollIndicator", boolean())
            .optional("socialProof", nested::<SocialProof>())
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroHeadline {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(default = "default_true")]
    pub animated: bool,
    #[serde(default = "default_true")]
    pub gradient_text: bool,
}

impl Schema for HeroHeadline {
    fn schema() -> Rule {
        object()
            .required("line1", string())
            .optional("line2", string())
            .defaulted("animated", boolean())
            .defaulted("gradientText", boolean())
            .into()
    }
}

// ============================================================================
// background
// ============================================================================

literal_enum! {
    pub enum BackgroundKind("hero background type") {
        Video => "video",
        Image => "image",
        Gradient => "gradient",
        Particles => "particles",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Also used as the video poster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f64,
    #[serde(default = "default_true")]
    pub parallax: bool,
}

fn default_overlay_opacity() -> f64 {
    0.7
}

impl Schema for HeroBackground {
    fn schema() -> Rule {
        object()
            .required("type", one_of(BackgroundKind::NAMES))
            .optional("videoUrl", string().format(Format::Link))
            .optional("imageUrl", string().format(Format::Link))
            .defaulted("overlayOpacity", number().range(0.0, 1.0))
            .defaulted("parallax", boolean())
            .into()
    }
}

// ============================================================================
// social proof
// ============================================================================

literal_enum! {
    pub enum SocialProofIcon("social proof icon") {
        Location => "location",
        School => "school",
        Star => "star",
        Verified => "verified",
        Trophy => "trophy",
        Users => "users",
        Calendar => "calendar",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProof {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub items: Vec<SocialProofItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProofItem {
    pub icon: SocialProofIcon,
    pub text: String,
}

impl SocialProofItem {
    pub fn new(icon: SocialProofIcon, text: impl Into<String>) -> Self {
        Self {
            icon,
            text: text.into(),
        }
    }
}

impl Schema for SocialProof {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required(
                "items",
                array(
                    object()
                        .required("icon", one_of(SocialProofIcon::NAMES))
                        .required("text", string().min_len(1)),
                ),
            )
            .into()
    }
}
