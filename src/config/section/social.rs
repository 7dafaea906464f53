//! `social` section: profile links. Empty strings count as unset.

use crate::config::schema::{Rule, Schema, object, string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_music: Option<String>,
}

impl SocialSection {
    /// `(network, url)` pairs that are set and non-empty.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("instagram", &self.instagram),
            ("twitter", &self.twitter),
            ("youtube", &self.youtube),
            ("tiktok", &self.tiktok),
            ("facebook", &self.facebook),
            ("linkedin", &self.linkedin),
            ("spotify", &self.spotify),
            ("appleMusic", &self.apple_music),
        ]
        .into_iter()
        .filter_map(|(network, url)| match url.as_deref() {
            Some(url) if !url.is_empty() => Some((network, url)),
            _ => None,
        })
        .collect()
    }
}

impl Schema for SocialSection {
    fn schema() -> Rule {
        object()
            .optional("instagram", string())
            .optional("twitter", string())
            .optional("youtube", string())
            .optional("tiktok", string())
            .optional("facebook", string())
            .optional("linkedin", string())
            .optional("spotify", string())
            .optional("appleMusic", string())
            .into()
    }
}
