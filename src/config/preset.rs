//! The canonical MH5 configuration.
//!
//! `apex init` writes this out as a starting point for a new deployment.

use super::SiteConfig;
use super::section::*;
use crate::config::Color;
use crate::theme::ThemeVariant;
use std::collections::BTreeMap;

fn s(value: &str) -> String {
    value.to_string()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|&(key, value)| (s(key), s(value)))
        .collect()
}

impl SiteConfig {
    /// The MH5 flagship site. Always valid.
    pub fn flagship() -> Self {
        Self {
            meta: meta(),
            brand: brand(),
            theme: theme(),
            navigation: navigation(),
            social: social(),
            hero: hero(),
            stats: stats(),
            events: events(),
            about: about(),
            sponsors: sponsors(),
            press: press(),
            newsletter: newsletter(),
            footer: footer(),
            features: FeaturesSection::default(),
            integrations: integrations(),
            performance: performance(),
        }
    }
}

fn meta() -> MetaSection {
    MetaSection {
        site_name: s("MH5"),
        tagline: s("The Movement Has 5ive"),
        description: s(
            "Basketball influencer, event host, and rising star. Tournaments, club nights, exclusive experiences.",
        ),
        keywords: ["basketball", "influencer", "events", "entertainment", "sports"]
            .map(s)
            .to_vec(),
        author: s("Milan Harrison"),
        site_url: s("https://mh5.com"),
        og_image: s("/images/og-default.jpg"),
        twitter_handle: some("@therealmilan5"),
        locale: s("en_US"),
    }
}

fn brand() -> BrandSection {
    BrandSection {
        name: s("MH5"),
        full_name: s("Milan Harrison"),
        logo: Logo {
            primary: s("/images/logo.svg"),
            light: some("/images/logo-light.svg"),
            dark: some("/images/logo-dark.svg"),
            icon: some("/images/icon.svg"),
        },
        colors: BrandColors {
            primary: Color::from("#7DF9FF"),
            secondary: Color::from("#9DFBFF"),
            accent: Color::from("#BDFCFF"),
            background: BackgroundColors {
                primary: Color::from("#0A0A0A"),
                secondary: Color::from("#1A1A1A"),
                tertiary: Some(Color::from("#2A2A2A")),
            },
            text: TextColors {
                primary: Color::from("#F5F5F5"),
                secondary: Color::from("rgba(245, 245, 245, 0.7)"),
                muted: Color::from("rgba(245, 245, 245, 0.4)"),
            },
            success: Some(Color::from("#22C55E")),
            warning: Some(Color::from("#F59E0B")),
            error: Some(Color::from("#EF4444")),
            info: Some(Color::from("#3B82F6")),
        },
        typography: BrandTypography {
            font_family: BrandFonts {
                heading: s(r#"var(--font-heading, "Oswald", sans-serif)"#),
                body: s(
                    r#"var(--font-body, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif)"#,
                ),
                accent: some(r#"var(--font-accent, "Oswald", sans-serif)"#),
            },
            scale: map(&[
                ("xs", "clamp(0.75rem, 0.7rem + 0.25vw, 0.875rem)"),
                ("sm", "clamp(0.875rem, 0.8rem + 0.375vw, 1rem)"),
                ("base", "clamp(1rem, 0.9rem + 0.5vw, 1.125rem)"),
                ("lg", "clamp(1.125rem, 1rem + 0.625vw, 1.25rem)"),
                ("xl", "clamp(1.25rem, 1.1rem + 0.75vw, 1.5rem)"),
                ("2xl", "clamp(1.5rem, 1.25rem + 1.25vw, 2rem)"),
                ("3xl", "clamp(2rem, 1.5rem + 2.5vw, 3rem)"),
                ("4xl", "clamp(2.5rem, 1.75rem + 3.75vw, 4rem)"),
                ("5xl", "clamp(3rem, 2rem + 5vw, 5rem)"),
                ("hero", "clamp(3.5rem, 2rem + 7.5vw, 8rem)"),
            ]),
        },
    }
}

fn theme() -> ThemeSection {
    ThemeSection {
        variant: ThemeVariant::LuxuryDark,
        layouts: Layouts {
            hero: HeroLayout::Asymmetric,
            stats: StatsLayout::Particle,
            events: EventsLayout::Cardstack,
            about: AboutLayout::SplitReveal,
        },
        animations: Animations::default(),
        spacing: ThemeSpacing {
            section: s("clamp(4rem, 3rem + 5vw, 8rem)"),
            container: s("7rem"),
            gutter: s("1.5rem"),
        },
        border_radius: map(&[
            ("sm", "0.375rem"),
            ("md", "0.5rem"),
            ("lg", "1rem"),
            ("xl", "1.5rem"),
            ("2xl", "2rem"),
            ("full", "9999px"),
        ]),
    }
}

fn navigation() -> NavigationSection {
    NavigationSection {
        main_nav: [
            ("Home", "/"),
            ("Legacy", "/legacy"),
            ("Events", "/events"),
            ("Media", "/media"),
            ("Partners", "/partners"),
            ("Contact", "/contact"),
        ]
        .into_iter()
        .map(|(label, href)| NavLink::new(label, href))
        .collect(),
        cta_button: Cta::new("Get Tickets", "/events", CtaVariant::Primary),
        show_social_links: true,
        sticky: true,
        transparent: true,
    }
}

fn social() -> SocialSection {
    SocialSection {
        instagram: some("https://www.instagram.com/therealmilan5/"),
        twitter: some("https://twitter.com/therealmilan5"),
        youtube: some("https://www.youtube.com/watch?v=3aPDRabLDzg"),
        tiktok: some(""),
        facebook: some(""),
        linkedin: some(""),
        spotify: some(""),
        apple_music: some(""),
    }
}

fn hero() -> HeroSection {
    HeroSection {
        headline: HeroHeadline {
            line1: s("THE MOVEMENT"),
            line2: some("HAS 5IVE"),
            animated: true,
            gradient_text: true,
        },
        subheadline: s("Basketball • Events • Lifestyle"),
        ctas: vec![
            Cta::new("Upcoming Events", "/events", CtaVariant::Primary),
            Cta::new("Partner With MH5", "/partners", CtaVariant::Outline),
        ],
        background: HeroBackground {
            kind: BackgroundKind::Video,
            video_url: some("/videos/hero-bg.mp4"),
            image_url: some("/images/hero-placeholder.jpg"),
            overlay_opacity: 0.7,
            parallax: true,
        },
        scroll_indicator: true,
        social_proof: Some(SocialProof {
            enabled: true,
            items: vec![
                SocialProofItem::new(SocialProofIcon::Location, "Springfield, MA"),
                SocialProofItem::new(SocialProofIcon::School, "Prodigy Prep Alumni"),
                SocialProofItem::new(SocialProofIcon::Star, "Super 7 All Years"),
                SocialProofItem::new(SocialProofIcon::Verified, "Pro Prospect"),
            ],
        }),
    }
}

fn stat(value: f64, suffix: &str, label: &str, description: &str) -> StatItem {
    StatItem {
        value,
        prefix: String::new(),
        suffix: s(suffix),
        label: s(label),
        description: some(description),
    }
}

fn stats() -> StatsSection {
    StatsSection {
        enabled: true,
        headline: s("By The Numbers"),
        subheadline: some("From Springfield courts to the professional stage"),
        items: vec![
            stat(
                4.0,
                "",
                "Super 7 Selections",
                "Consecutive years of elite recognition",
            ),
            stat(65.0, "", "Points First Weekend", "Prodigy Prep debut dominance"),
            stat(500.0, "K+", "Social Followers", "Across all platforms"),
            stat(10.0, "+", "Brand Partnerships", "Premium collaborations"),
        ],
        animate_on_scroll: true,
        particle_effect: true,
    }
}

fn events() -> EventsSection {
    EventsSection {
        enabled: true,
        section_title: some("Live Events"),
        headline: EventsHeadline::Plain(s("Experience It Live")),
        subheadline: s("Don't miss out on the next experience"),
        show_featured_only: true,
        show_countdown: true,
        show_scarcity: true,
        show_pricing: true,
        items: Some(vec![
            EventItem {
                id: s("mh5-tournament-2024"),
                title: s("MH5 Summer Tournament"),
                date: s("2024-07-15"),
                time: some("7:00 PM EST"),
                venue: s("Springfield Arena"),
                location: s("Springfield, MA"),
                kind: s("Tournament"),
                tickets_remaining: Some(47.0),
                total_tickets: Some(200.0),
                price: Some(EventPrice {
                    general: Some(25.0),
                    vip: Some(75.0),
                    vvip: Some(150.0),
                }),
                featured: true,
                description: some("The biggest basketball tournament of the summer."),
                image: some("/images/events/tournament.jpg"),
            },
            EventItem {
                id: s("mh5-club-night"),
                title: s("MH5 Club Night"),
                date: s("2024-08-20"),
                time: some("10:00 PM EST"),
                venue: s("Club Luxe"),
                location: s("Boston, MA"),
                kind: s("Club Night"),
                tickets_remaining: Some(120.0),
                total_tickets: Some(300.0),
                price: Some(EventPrice {
                    general: Some(50.0),
                    vip: Some(150.0),
                    vvip: None,
                }),
                featured: false,
                description: some("An exclusive night with MH5."),
                image: some("/images/events/club.jpg"),
            },
            EventItem {
                id: s("mh5-vip-experience"),
                title: s("VIP Meet & Greet"),
                date: s("2024-09-10"),
                time: some("5:00 PM EST"),
                venue: s("Private Venue"),
                location: s("New York, NY"),
                kind: s("VIP Experience"),
                tickets_remaining: Some(15.0),
                total_tickets: Some(50.0),
                price: Some(EventPrice {
                    general: None,
                    vip: None,
                    vvip: Some(500.0),
                }),
                featured: true,
                description: some("An intimate experience with limited spots."),
                image: some("/images/events/vip.jpg"),
            },
        ]),
        fomo: FomoSettings::default(),
    }
}

fn about() -> AboutSection {
    AboutSection {
        enabled: true,
        headline: AboutHeadline {
            line1: s("From Springfield"),
            line2: some("To The World"),
        },
        content: vec![
            s(
                "Milan Harrison's journey from the courts of Western Massachusetts to the national spotlight is a testament to dedication, skill, and an unwavering commitment to excellence.",
            ),
            s(
                "As a \"Super 7\" selection every year of high school, a standout at Prodigy Prep alongside Julian Newman, and now pursuing professional opportunities—Milan represents the next generation of basketball talent and entertainment influence.",
            ),
        ],
        cta: Some(Cta::new("Read The Full Story", "/legacy", CtaVariant::Primary)),
        image: Some(AboutImage {
            src: s("/images/about-portrait.jpg"),
            alt: s("Milan Harrison Portrait"),
        }),
    }
}

fn sponsors() -> SponsorsSection {
    SponsorsSection {
        enabled: true,
        headline: s("Proudly Partnered With"),
        logos: vec![
            SponsorLogo::new("Wooter Apparel", "/images/sponsors/wooter.svg", Some("#")),
            SponsorLogo::new("Partner 2", "/images/sponsors/partner2.svg", Some("#")),
            SponsorLogo::new("Partner 3", "/images/sponsors/partner3.svg", Some("#")),
            SponsorLogo::new("Partner 4", "/images/sponsors/partner4.svg", Some("#")),
        ],
        style: SponsorStyle::Carousel,
        grayscale: true,
    }
}

fn press() -> PressSection {
    PressSection {
        enabled: true,
        headline: s("As Seen In"),
        outlets: vec![
            PressOutlet::new("MassLive", "/images/press/masslive.svg"),
            PressOutlet::new("WWLP", "/images/press/wwlp.svg"),
            PressOutlet::new("The Report Mag", "/images/press/report.svg"),
            PressOutlet::new("Wooter Apparel", "/images/press/wooter.svg"),
        ],
    }
}

fn newsletter() -> NewsletterSection {
    NewsletterSection {
        enabled: true,
        headline: s("Join The Movement"),
        subheadline: some(
            "Get exclusive access to events, drops, and behind-the-scenes content.",
        ),
        placeholder: s("Enter your email"),
        button_text: s("Subscribe"),
        success_message: s("You're in! Check your inbox for confirmation."),
        provider: EmailProvider::ConvertKit,
        form_id: some(""),
        exit_intent: Some(ExitIntent {
            enabled: true,
            delay: 3000.0,
            headline: s("Wait! Before you go..."),
            offer: some("Get 10% off your first event ticket"),
        }),
        scroll_trigger: Some(ScrollTrigger::default()),
    }
}

fn footer() -> FooterSection {
    FooterSection {
        tagline: s(
            "The Movement Has 5ive. Basketball influencer, event host, and rising star from Springfield, Massachusetts.",
        ),
        columns: vec![
            FooterColumn::new(
                "Navigate",
                &[
                    ("Home", "/"),
                    ("Legacy", "/legacy"),
                    ("Events", "/events"),
                    ("Media", "/media"),
                ],
            ),
            FooterColumn::new(
                "Business",
                &[
                    ("Partnerships", "/partners"),
                    ("Contact", "/contact"),
                    ("Media Kit", "/media#kit"),
                ],
            ),
            FooterColumn::new(
                "Legal",
                &[
                    ("Terms of Service", "/terms"),
                    ("Privacy Policy", "/privacy"),
                    ("Event Terms", "/event-terms"),
                ],
            ),
        ],
        show_social: true,
        copyright: s("© {year} MH5 / Milan Harrison. All rights reserved."),
        location: some("Springfield, MA • Global"),
    }
}

fn integrations() -> IntegrationsSection {
    IntegrationsSection {
        analytics: AnalyticsIds {
            google_analytics: some(""),
            facebook_pixel: some(""),
            hotjar: some(""),
        },
        payments: Payments {
            stripe: Some(StripeKeys {
                publishable_key: some(""),
                webhook_secret: some(""),
            }),
        },
        email: EmailIntegration {
            provider: EmailProvider::ConvertKit,
            api_key: some(""),
        },
        cms: CmsIntegration {
            provider: CmsProvider::None,
            project_id: some(""),
        },
    }
}

fn performance() -> PerformanceSection {
    PerformanceSection {
        lazy_load_images: true,
        preload_critical: true,
        enable_service_worker: false,
        image_optimization: ImageOptimization {
            quality: 80.0,
            formats: vec![ImageFormat::Webp, ImageFormat::Avif],
        },
    }
}
