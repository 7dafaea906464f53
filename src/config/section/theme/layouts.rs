//! Per-section layout selection.

use crate::config::schema::{Rule, Schema, object, one_of};
use crate::config::types::literal_enum;
use crate::layout::{self, LayoutComponent};
use serde::{Deserialize, Serialize};

literal_enum! {
    pub enum HeroLayout("hero layout") {
        Asymmetric => "asymmetric",
        Fullscreen => "fullscreen",
        Cinematic => "cinematic",
        Editorial => "editorial",
    }
}

literal_enum! {
    pub enum StatsLayout("stats layout") {
        Particle => "particle",
        Odometer => "odometer",
        Flip3d => "flip3d",
    }
}

literal_enum! {
    pub enum EventsLayout("events layout") {
        Timeline => "timeline",
        Cardstack => "cardstack",
        Immersive => "immersive",
    }
}

literal_enum! {
    pub enum AboutLayout("about layout") {
        SplitReveal => "split-reveal",
        Parallax => "parallax",
        QuoteCarousel => "quote-carousel",
    }
}

/// Layout variant chosen for each variant-aware section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layouts {
    pub hero: HeroLayout,
    pub stats: StatsLayout,
    pub events: EventsLayout,
    pub about: AboutLayout,
}

impl Layouts {
    /// Resolve every selection to its component, in page order.
    pub fn components(&self) -> [LayoutComponent; 4] {
        [
            layout::get_hero_variant(Some(self.hero.as_str())),
            layout::get_stats_variant(Some(self.stats.as_str())),
            layout::get_events_variant(Some(self.events.as_str())),
            layout::get_about_variant(Some(self.about.as_str())),
        ]
    }
}

impl Schema for Layouts {
    fn schema() -> Rule {
        object()
            .required("hero", one_of(HeroLayout::NAMES))
            .required("stats", one_of(StatsLayout::NAMES))
            .required("events", one_of(EventsLayout::NAMES))
            .required("about", one_of(AboutLayout::NAMES))
            .into()
    }
}
