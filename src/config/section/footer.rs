//! `footer` section.

use super::common::default_true;
use crate::config::schema::{Rule, Schema, array, boolean, object, string};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the current year in `copyright`.
pub const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    #[serde(default = "default_true")]
    pub show_social: bool,
    /// May contain `{year}`.
    pub copyright: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FooterSection {
    pub fn copyright_for(&self, year: i32) -> String {
        self.copyright
            .replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>, links: &[(&str, &str)]) -> Self {
        Self {
            title: title.into(),
            links: links
                .iter()
                .map(|&(label, href)| FooterLink {
                    label: label.to_string(),
                    href: href.to_string(),
                })
                .collect(),
        }
    }
}

impl Schema for FooterSection {
    fn schema() -> Rule {
        let link = object()
            .required("label", string().min_len(1))
            .required("href", string());
        let column = object()
            .required("title", string().min_len(1))
            .required("links", array(link));

        object()
            .required("tagline", string())
            .required("columns", array(column))
            .defaulted("showSocial", boolean())
            .required("copyright", string())
            .optional("location", string())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::json;

    #[test]
    fn test_copyright_year() {
        let footer: FooterSection = test_parse_section(json!({
            "tagline": "The Movement Has 5ive.",
            "columns": [],
            "copyright": "© {year} MH5 / Milan Harrison. All rights reserved."
        }));
        assert!(footer.show_social);
        assert_eq!(
            footer.copyright_for(2026),
            "© 2026 MH5 / Milan Harrison. All rights reserved."
        );
    }

    #[test]
    fn test_column_link_labels() {
        let diag = FooterSection::schema().check_root(&json!({
            "tagline": "",
            "columns": [{ "title": "Legal", "links": [{ "label": "", "href": "/terms" }] }],
            "copyright": ""
        }));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "columns.0.links.0.label");
    }
}
