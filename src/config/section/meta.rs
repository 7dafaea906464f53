//! `meta` section: site identity and SEO defaults.
//!
//! # Example
//!
//! ```toml
//! [meta]
//! siteName = "MH5"
//! tagline = "The Movement Has 5ive"
//! description = "Basketball influencer, event host, and rising star."
//! keywords = ["basketball", "events"]
//! author = "Milan Harrison"
//! siteUrl = "https://mh5.com"
//! ogImage = "/images/og-default.jpg"
//! twitterHandle = "@therealmilan5"  # optional
//! locale = "en_US"                  # default
//! ```

use crate::config::schema::{Format, Rule, Schema, array, object, string};
use serde::{Deserialize, Serialize};

/// Longest accepted `meta.description`, in UTF-16 code units.
pub const MAX_DESCRIPTION_LEN: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSection {
    pub site_name: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    /// Absolute site URL.
    pub site_url: String,
    /// Default Open Graph image.
    pub og_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Schema for MetaSection {
    fn schema() -> Rule {
        object()
            .required("siteName", string().min_len(1))
            .required("tagline", string())
            .required(
                "description",
                string().max_len(
                    MAX_DESCRIPTION_LEN,
                    "Meta description should be under 160 characters",
                ),
            )
            .required("keywords", array(string()))
            .required("author", string())
            .required("siteUrl", string().format(Format::Url))
            .required("ogImage", string().format(Format::Link))
            .optional("twitterHandle", string())
            .defaulted("locale", string())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_section;
    use serde_json::{Value, json};

    fn meta(description: &str) -> Value {
        json!({
            "siteName": "MH5",
            "tagline": "The Movement Has 5ive",
            "description": description,
            "keywords": [],
            "author": "Milan Harrison",
            "siteUrl": "https://mh5.com",
            "ogImage": "/images/og-default.jpg"
        })
    }

    #[test]
    fn test_locale_default() {
        let meta: MetaSection = test_parse_section(meta("short"));
        assert_eq!(meta.locale, "en_US");
        assert_eq!(meta.twitter_handle, None);
    }

    #[test]
    fn test_description_length_boundary() {
        let ok = "a".repeat(MAX_DESCRIPTION_LEN);
        assert!(MetaSection::schema().check_root(&meta(&ok)).is_empty());

        let long = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        let diag = MetaSection::schema().check_root(&meta(&long));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "description");
        assert_eq!(
            diag.errors()[0].message,
            "Meta description should be under 160 characters"
        );
    }

    #[test]
    fn test_og_image_rejects_bare_file_name() {
        let mut value = meta("short");
        value["ogImage"] = json!("og.jpg");
        let diag = MetaSection::schema().check_root(&value);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "ogImage");

        value["ogImage"] = json!("https://cdn.mh5.com/og.jpg");
        assert!(MetaSection::schema().check_root(&value).is_empty());
    }

    #[test]
    fn test_site_url_must_be_absolute() {
        let mut value = meta("short");
        value["siteUrl"] = json!("mh5.com");
        let diag = MetaSection::schema().check_root(&value);
        assert_eq!(diag.errors()[0].field.as_str(), "siteUrl");
        assert_eq!(diag.errors()[0].message, "Invalid url");
    }
}
