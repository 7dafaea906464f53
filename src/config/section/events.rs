//! `events` section: upcoming events and FOMO indicators.
//!
//! # Example
//!
//! ```toml
//! [events]
//! headline = { prefix = "Experience It", highlight = "Live" }
//! subheadline = "Don't miss out on the next experience"
//!
//! [[events.items]]
//! id = "mh5-tournament-2024"
//! title = "MH5 Summer Tournament"
//! date = "2024-07-15"
//! venue = "Springfield Arena"
//! location = "Springfield, MA"
//! type = "Tournament"
//! ticketsRemaining = 47
//! totalTickets = 200
//! price = { general = 25, vip = 75 }
//!
//! [events.fomo]
//! scarcityThreshold = 0.25
//! ```
//!
//! `ticketsRemaining` is not checked against `totalTickets`.

use super::common::default_true;
use crate::config::schema::{
    Format, Rule, Schema, array, boolean, nested, number, object, string, union,
};
use serde::{Deserialize, Serialize};

/// Remaining share at or below which an event is critically scarce.
pub const CRITICAL_THRESHOLD: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    pub headline: EventsHeadline,
    pub subheadline: String,
    #[serde(default = "default_true")]
    pub show_featured_only: bool,
    #[serde(default = "default_true")]
    pub show_countdown: bool,
    #[serde(default = "default_true")]
    pub show_scarcity: bool,
    #[serde(default = "default_true")]
    pub show_pricing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<EventItem>>,
    pub fomo: FomoSettings,
}

impl EventsSection {
    /// Items to list, honouring `showFeaturedOnly`.
    pub fn visible_items(&self) -> impl Iterator<Item = &EventItem> {
        let featured_only = self.show_featured_only;
        self.items
            .iter()
            .flatten()
            .filter(move |item| !featured_only || item.featured)
    }
}

impl Schema for EventsSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .optional("sectionTitle", string())
            .required("headline", nested::<EventsHeadline>())
            .required("subheadline", string())
            .defaulted("showFeaturedOnly", boolean())
            .defaulted("showCountdown", boolean())
            .defaulted("showScarcity", boolean())
            .defaulted("showPricing", boolean())
            .optional("items", array(nested::<EventItem>()))
            .required("fomo", nested::<FomoSettings>())
            .into()
    }
}

/// Plain headline, or a prefix followed by a highlighted phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventsHeadline {
    Plain(String),
    Split { prefix: String, highlight: String },
}

impl EventsHeadline {
    /// Full headline text.
    pub fn text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Split { prefix, highlight } => format!("{prefix} {highlight}"),
        }
    }
}

impl Schema for EventsHeadline {
    fn schema() -> Rule {
        union([
            Rule::from(string()),
            Rule::from(
                object()
                    .required("prefix", string())
                    .required("highlight", string()),
            ),
        ])
    }
}

// ============================================================================
// items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub venue: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tickets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<EventPrice>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Ticket price per tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vvip: Option<f64>,
}

impl EventPrice {
    /// Cheapest listed tier.
    pub fn starting_at(&self) -> Option<f64> {
        [self.general, self.vip, self.vvip]
            .into_iter()
            .flatten()
            .reduce(f64::min)
    }
}

/// How close an event is to selling out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scarcity {
    Normal,
    Urgent,
    Critical,
}

impl EventItem {
    /// Share of tickets still available, if both counts are known.
    pub fn remaining_ratio(&self) -> Option<f64> {
        match (self.tickets_remaining, self.total_tickets) {
            (Some(remaining), Some(total)) if total > 0.0 => Some(remaining / total),
            _ => None,
        }
    }

    pub fn scarcity(&self, fomo: &FomoSettings) -> Option<Scarcity> {
        let ratio = self.remaining_ratio()?;
        Some(if ratio <= CRITICAL_THRESHOLD {
            Scarcity::Critical
        } else if ratio <= fomo.scarcity_threshold {
            Scarcity::Urgent
        } else {
            Scarcity::Normal
        })
    }
}

impl Schema for EventItem {
    fn schema() -> Rule {
        object()
            .required("id", string())
            .required("title", string())
            .required("date", string())
            .optional("time", string())
            .required("venue", string())
            .required("location", string())
            .required("type", string())
            .optional("ticketsRemaining", number())
            .optional("totalTickets", number())
            .optional(
                "price",
                object()
                    .optional("general", number())
                    .optional("vip", number())
                    .optional("vvip", number()),
            )
            .defaulted("featured", boolean())
            .optional("description", string())
            .optional("image", string().format(Format::Link))
            .into()
    }
}

// ============================================================================
// fomo
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FomoSettings {
    pub enabled: bool,
    pub show_viewers: bool,
    pub show_recent_purchases: bool,
    /// Remaining share at or below which an event is shown as urgent.
    pub scarcity_threshold: f64,
}

impl Default for FomoSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_viewers: true,
            show_recent_purchases: true,
            scarcity_threshold: 0.25,
        }
    }
}

impl Schema for FomoSettings {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .defaulted("showViewers", boolean())
            .defaulted("showRecentPurchases", boolean())
            .defaulted("scarcityThreshold", number().range(0.0, 1.0))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::{Value, json};

    fn item(id: &str, featured: bool) -> Value {
        json!({
            "id": id,
            "title": "MH5 Club Night",
            "date": "2024-08-20",
            "venue": "Club Luxe",
            "location": "Boston, MA",
            "type": "Club Night",
            "featured": featured
        })
    }

    fn events(items: Vec<Value>) -> Value {
        json!({
            "headline": "Experience It Live",
            "subheadline": "Don't miss out",
            "items": items,
            "fomo": {}
        })
    }

    fn tickets(remaining: f64, total: f64) -> EventItem {
        let mut value = item("e", false);
        value["ticketsRemaining"] = json!(remaining);
        value["totalTickets"] = json!(total);
        test_parse_section(value)
    }

    #[test]
    fn test_event_defaults() {
        let mut value = item("e", false);
        value.as_object_mut().unwrap().remove("featured");
        let event: EventItem = test_parse_section(value);
        assert!(!event.featured);
        assert_eq!(event.kind, "Club Night");

        let section: EventsSection = test_parse_section(events(vec![]));
        assert_eq!(section.fomo, FomoSettings::default());
        assert!(section.show_featured_only && section.show_pricing);
    }

    #[test]
    fn test_headline_union() {
        let section: EventsSection = test_parse_section(events(vec![]));
        assert_eq!(
            section.headline,
            EventsHeadline::Plain("Experience It Live".into())
        );

        let headline: EventsHeadline = serde_json::from_value(json!({
            "prefix": "Experience It",
            "highlight": "Live"
        }))
        .unwrap();
        assert_eq!(headline.text(), "Experience It Live");

        let diag = EventsHeadline::schema().check_root(&json!({ "prefix": "x" }));
        assert_eq!(diag.errors()[0].message, "Invalid input");
    }

    #[test]
    fn test_remaining_may_exceed_total() {
        let mut value = item("e", true);
        value["ticketsRemaining"] = json!(500);
        value["totalTickets"] = json!(200);
        assert!(EventItem::schema().check_root(&value).is_empty());
    }

    #[test]
    fn test_visible_items_featured_only() {
        let mut section: EventsSection =
            test_parse_section(events(vec![item("a", true), item("b", false)]));
        let ids: Vec<_> = section.visible_items().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);

        section.show_featured_only = false;
        assert_eq!(section.visible_items().count(), 2);

        section.items = None;
        assert_eq!(section.visible_items().count(), 0);
    }

    #[test]
    fn test_scarcity_levels() {
        let fomo = FomoSettings::default();
        assert_eq!(tickets(15.0, 200.0).scarcity(&fomo), Some(Scarcity::Critical));
        assert_eq!(tickets(20.0, 200.0).scarcity(&fomo), Some(Scarcity::Critical));
        assert_eq!(tickets(47.0, 200.0).scarcity(&fomo), Some(Scarcity::Urgent));
        assert_eq!(tickets(120.0, 300.0).scarcity(&fomo), Some(Scarcity::Normal));
        assert_eq!(tickets(5.0, 0.0).scarcity(&fomo), None);

        let event: EventItem = test_parse_section(item("e", false));
        assert_eq!(event.scarcity(&fomo), None);
    }

    #[test]
    fn test_price_starting_at() {
        let price = EventPrice {
            general: None,
            vip: Some(150.0),
            vvip: Some(500.0),
        };
        assert_eq!(price.starting_at(), Some(150.0));
        assert_eq!(EventPrice::default().starting_at(), None);
    }

    #[test]
    fn test_scarcity_threshold_range() {
        let diag = FomoSettings::schema().check_root(&json!({ "scarcityThreshold": -0.5 }));
        assert_eq!(diag.errors()[0].field.as_str(), "scarcityThreshold");
    }
}
