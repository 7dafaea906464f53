//! `stats` section: the "by the numbers" strip.

use super::common::default_true;
use crate::config::schema::{Rule, Schema, array, boolean, object, number, string};
use serde::{Deserialize, Serialize};

/// Most stat items a layout can place.
pub const MAX_STAT_ITEMS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub items: Vec<StatItem>,
    #[serde(default = "default_true")]
    pub animate_on_scroll: bool,
    #[serde(default = "default_true")]
    pub particle_effect: bool,
}

impl Schema for StatsSection {
    fn schema() -> Rule {
        object()
            .defaulted("enabled", boolean())
            .required("headline", string())
            .optional("subheadline", string())
            .required(
                "items",
                array(StatItem::schema())
                    .min_items(1)
                    .max_items(MAX_STAT_ITEMS),
            )
            .defaulted("animateOnScroll", boolean())
            .defaulted("particleEffect", boolean())
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: f64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StatItem {
    /// Value with prefix and suffix, e.g. `500K+`.
    pub fn display_value(&self) -> String {
        format!("{}{}{}", self.prefix, self.value, self.suffix)
    }
}

impl Schema for StatItem {
    fn schema() -> Rule {
        object()
            .required("value", number())
            .defaulted("suffix", string())
            .defaulted("prefix", string())
            .required("label", string().min_len(1))
            .optional("description", string())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::{Value, json};

    fn stats(count: usize) -> Value {
        let items: Vec<_> = (0..count)
            .map(|i| json!({ "value": i, "label": format!("Stat {i}") }))
            .collect();
        json!({ "headline": "By The Numbers", "items": items })
    }

    #[test]
    fn test_stat_item_defaults() {
        let stats: StatsSection = test_parse_section(stats(1));
        assert_eq!(stats.items[0].prefix, "");
        assert_eq!(stats.items[0].suffix, "");
        assert!(stats.enabled && stats.animate_on_scroll && stats.particle_effect);
    }

    #[test]
    fn test_item_count_bounds() {
        assert!(StatsSection::schema().check_root(&stats(6)).is_empty());

        let diag = StatsSection::schema().check_root(&stats(7));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "items");
        assert_eq!(
            diag.errors()[0].message,
            "Array must contain at most 6 element(s)"
        );

        let diag = StatsSection::schema().check_root(&stats(0));
        assert_eq!(
            diag.errors()[0].message,
            "Array must contain at least 1 element(s)"
        );
    }

    #[test]
    fn test_display_value() {
        let item: StatItem = test_parse_section(json!({
            "value": 500,
            "suffix": "K+",
            "label": "Social Followers"
        }));
        assert_eq!(item.display_value(), "500K+");
    }
}
