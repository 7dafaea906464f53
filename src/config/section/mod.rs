//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key of the site configuration:
//!
//! | Module         | Key(s)                | Purpose                              |
//! |----------------|-----------------------|--------------------------------------|
//! | `meta`         | `meta`                | Site identity, SEO defaults          |
//! | `brand`        | `brand`               | Name, logo, palette, type scale      |
//! | `theme`        | `theme`               | Token bundle, layouts, animations    |
//! | `navigation`   | `navigation`          | Header links and CTA                 |
//! | `social`       | `social`              | Profile links                        |
//! | `hero`         | `hero`                | Headline, background, social proof   |
//! | `stats`        | `stats`               | "By the numbers" strip               |
//! | `events`       | `events`              | Event listing and FOMO settings      |
//! | `about`        | `about`               | Bio block                            |
//! | `partners`     | `sponsors`, `press`   | Partner logos, media mentions        |
//! | `newsletter`   | `newsletter`          | Email capture                        |
//! | `footer`       | `footer`              | Footer columns and copyright         |
//! | `features`     | `features`            | Feature toggles                      |
//! | `integrations` | `integrations`        | Third-party service ids              |
//! | `performance`  | `performance`         | Loading and image optimization       |
//!
//! Every section type implements [`Schema`](super::schema::Schema); the rule
//! lives next to the struct it describes.
//!
//! Asset fields are stricter than plain strings: they must be an absolute URL
//! or start with `/` ([`Format::Link`](super::schema::Format::Link)).

mod about;
mod brand;
mod common;
mod events;
mod features;
mod footer;
mod hero;
mod integrations;
mod meta;
mod navigation;
mod newsletter;
mod partners;
mod performance;
mod social;
mod stats;
pub mod theme;

pub use about::{AboutHeadline, AboutImage, AboutSection};
pub use brand::{
    BackgroundColors, BrandColors, BrandFonts, BrandSection, BrandTypography, Logo, TextColors,
};
pub use common::{Cta, CtaVariant};
pub use events::{
    CRITICAL_THRESHOLD, EventItem, EventPrice, EventsHeadline, EventsSection, FomoSettings,
    Scarcity,
};
pub use features::{FeatureComponents, FeatureFunctionality, FeaturePages, FeaturesSection};
pub use footer::{FooterColumn, FooterLink, FooterSection, YEAR_PLACEHOLDER};
pub use hero::{
    BackgroundKind, HeroBackground, HeroHeadline, HeroSection, SocialProof, SocialProofIcon,
    SocialProofItem,
};
pub use integrations::{
    AnalyticsIds, CmsIntegration, CmsProvider, EmailIntegration, IntegrationsSection, Payments,
    StripeKeys,
};
pub use meta::{MAX_DESCRIPTION_LEN, MetaSection};
pub use navigation::{NavLink, NavigationSection};
pub use newsletter::{EmailProvider, ExitIntent, NewsletterSection, ScrollTrigger};
pub use partners::{PressOutlet, PressSection, SponsorLogo, SponsorStyle, SponsorsSection};
pub use performance::{ImageFormat, ImageOptimization, PerformanceSection};
pub use social::SocialSection;
pub use stats::{MAX_STAT_ITEMS, StatItem, StatsSection};
pub use theme::{
    AboutLayout, Animations, EventsLayout, HeroLayout, Layouts, PerformanceMode, StatsLayout,
    ThemeSection, ThemeSpacing,
};
