//! Section layout variants.
//!
//! Each variant-aware section (hero, stats, events, about) has a small set
//! of interchangeable components. The `get_*_variant` selectors map a
//! layout name to its component and never fail: a missing or unknown name
//! resolves to the section's default.
//!
//! | Section | Names                                           | Default            |
//! |---------|-------------------------------------------------|--------------------|
//! | hero    | asymmetric, fullscreen, cinematic, editorial    | `HeroAsymmetric`   |
//! | stats   | particle, odometer, flip3d                      | `StatsParticle`    |
//! | events  | timeline, cardstack, immersive                  | `EventsCardstack`  |
//! | about   | split-reveal, parallax, quote-carousel          | `AboutSplitReveal` |
//!
//! `fullscreen` is an alias: it resolves to [`LayoutComponent::HeroCinematic`].

use std::fmt;

/// Section a component renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Stats,
    Events,
    About,
}

impl SectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Stats => "stats",
            Self::Events => "events",
            Self::About => "about",
        }
    }
}

/// A concrete layout component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutComponent {
    HeroAsymmetric,
    HeroCinematic,
    HeroEditorial,
    StatsParticle,
    StatsOdometer,
    StatsFlip3d,
    EventsTimeline,
    EventsCardstack,
    EventsImmersive,
    AboutSplitReveal,
    AboutParallax,
    AboutQuoteCarousel,
}

/// Descriptive data for variant pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub best_for: &'static [&'static str],
}

impl LayoutComponent {
    pub const ALL: [Self; 12] = [
        Self::HeroAsymmetric,
        Self::HeroCinematic,
        Self::HeroEditorial,
        Self::StatsParticle,
        Self::StatsOdometer,
        Self::StatsFlip3d,
        Self::EventsTimeline,
        Self::EventsCardstack,
        Self::EventsImmersive,
        Self::AboutSplitReveal,
        Self::AboutParallax,
        Self::AboutQuoteCarousel,
    ];

    pub const fn section(self) -> SectionKind {
        match self {
            Self::HeroAsymmetric | Self::HeroCinematic | Self::HeroEditorial => SectionKind::Hero,
            Self::StatsParticle | Self::StatsOdometer | Self::StatsFlip3d => SectionKind::Stats,
            Self::EventsTimeline | Self::EventsCardstack | Self::EventsImmersive => {
                SectionKind::Events
            }
            Self::AboutSplitReveal | Self::AboutParallax | Self::AboutQuoteCarousel => {
                SectionKind::About
            }
        }
    }

    /// Canonical layout name (the one `theme.layouts` uses).
    pub const fn layout_name(self) -> &'static str {
        match self {
            Self::HeroAsymmetric => "asymmetric",
            Self::HeroCinematic => "cinematic",
            Self::HeroEditorial => "editorial",
            Self::StatsParticle => "particle",
            Self::StatsOdometer => "odometer",
            Self::StatsFlip3d => "flip3d",
            Self::EventsTimeline => "timeline",
            Self::EventsCardstack => "cardstack",
            Self::EventsImmersive => "immersive",
            Self::AboutSplitReveal => "split-reveal",
            Self::AboutParallax => "parallax",
            Self::AboutQuoteCarousel => "quote-carousel",
        }
    }

    pub fn metadata(self) -> LayoutMetadata {
        const fn meta(
            name: &'static str,
            description: &'static str,
            best_for: &'static [&'static str],
        ) -> LayoutMetadata {
            LayoutMetadata {
                name,
                description,
                best_for,
            }
        }

        match self {
            Self::HeroAsymmetric => meta(
                "Asymmetric Split",
                "Diagonal divisions with kinetic text. Bold and modern.",
                &["Athletes", "Tech brands", "Modern personalities"],
            ),
            Self::HeroCinematic => meta(
                "Cinematic",
                "Full-screen video background with particle effects. Dramatic.",
                &["Musicians", "Event promoters", "Visual artists"],
            ),
            Self::HeroEditorial => meta(
                "Editorial",
                "Magazine-style typography. Minimal and sophisticated.",
                &["Fashion", "Lifestyle", "Luxury brands"],
            ),
            Self::StatsParticle => meta(
                "Particle Burst",
                "Numbers explode into view with particle effects",
                &["Athletes", "High-energy brands", "Tech influencers"],
            ),
            Self::StatsOdometer => meta(
                "Rolling Odometer",
                "Numbers roll like a luxury car odometer",
                &["Luxury brands", "Finance influencers", "Achievement-focused"],
            ),
            Self::StatsFlip3d => meta(
                "3D Flip Cards",
                "Cards flip to reveal stats in dramatic fashion",
                &["Interactive experiences", "Engagement-focused", "Playful brands"],
            ),
            Self::EventsTimeline => meta(
                "Vertical Timeline",
                "Events displayed on an elegant chronological timeline",
                &["Multiple events", "Historical feel", "Clean organization"],
            ),
            Self::EventsCardstack => meta(
                "Interactive Cards",
                "Rich event cards with FOMO indicators and countdowns",
                &["Conversion focus", "Few featured events", "E-commerce"],
            ),
            Self::EventsImmersive => meta(
                "Immersive Showcase",
                "Full-screen cinematic event presentation",
                &["Hero events", "Visual impact", "Premium feel"],
            ),
            Self::AboutSplitReveal => meta(
                "Split Reveal",
                "Split screen with cinematic reveal animations",
                &["Personal brands", "Detailed bios", "Achievement focus"],
            ),
            Self::AboutParallax => meta(
                "Parallax Immersive",
                "Full-width parallax scrolling experience",
                &["Visual impact", "Single message", "Hero-style"],
            ),
            Self::AboutQuoteCarousel => meta(
                "Quote Carousel",
                "Rotating quotes with bio content",
                &["Testimonials", "Philosophy focus", "Social proof"],
            ),
        }
    }
}

impl fmt::Display for LayoutComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section().as_str(), self.layout_name())
    }
}

// ============================================================================
// selectors
// ============================================================================

pub fn get_hero_variant(name: Option<&str>) -> LayoutComponent {
    match name {
        Some("fullscreen" | "cinematic") => LayoutComponent::HeroCinematic,
        Some("editorial") => LayoutComponent::HeroEditorial,
        _ => LayoutComponent::HeroAsymmetric,
    }
}

pub fn get_stats_variant(name: Option<&str>) -> LayoutComponent {
    match name {
        Some("odometer") => LayoutComponent::StatsOdometer,
        Some("flip3d") => LayoutComponent::StatsFlip3d,
        _ => LayoutComponent::StatsParticle,
    }
}

pub fn get_events_variant(name: Option<&str>) -> LayoutComponent {
    match name {
        Some("timeline") => LayoutComponent::EventsTimeline,
        Some("immersive") => LayoutComponent::EventsImmersive,
        _ => LayoutComponent::EventsCardstack,
    }
}

pub fn get_about_variant(name: Option<&str>) -> LayoutComponent {
    match name {
        Some("parallax") => LayoutComponent::AboutParallax,
        Some("quote-carousel") => LayoutComponent::AboutQuoteCarousel,
        _ => LayoutComponent::AboutSplitReveal,
    }
}

/// Dispatch to the selector for `section`.
pub fn get_variant(section: SectionKind, name: Option<&str>) -> LayoutComponent {
    match section {
        SectionKind::Hero => get_hero_variant(name),
        SectionKind::Stats => get_stats_variant(name),
        SectionKind::Events => get_events_variant(name),
        SectionKind::About => get_about_variant(name),
    }
}
