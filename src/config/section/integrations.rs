//! `integrations` section: third-party service identifiers.

use super::newsletter::EmailProvider;
use crate::config::schema::{Rule, Schema, object, one_of, string};
use crate::config::types::literal_enum;
use serde::{Deserialize, Serialize};

literal_enum! {
    #[derive(Default)]
    pub enum CmsProvider("CMS provider") {
        Sanity => "sanity",
        Contentful => "contentful",
        Strapi => "strapi",
        #[default]
        None => "none",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationsSection {
    pub analytics: AnalyticsIds,
    pub payments: Payments,
    pub email: EmailIntegration,
    pub cms: CmsIntegration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsIds {
    /// GA4 measurement id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_pixel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotjar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe: Option<StripeKeys>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripeKeys {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailIntegration {
    pub provider: EmailProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsIntegration {
    pub provider: CmsProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl CmsIntegration {
    /// True when content comes from an external CMS.
    pub fn is_enabled(&self) -> bool {
        self.provider != CmsProvider::None
    }
}

impl Schema for IntegrationsSection {
    fn schema() -> Rule {
        object()
            .required(
                "analytics",
                object()
                    .optional("googleAnalytics", string())
                    .optional("facebookPixel", string())
                    .optional("hotjar", string()),
            )
            .required(
                "payments",
                object().optional(
                    "stripe",
                    object()
                        .optional("publishableKey", string())
                        .optional("webhookSecret", string()),
                ),
            )
            .required(
                "email",
                object()
                    .required("provider", one_of(EmailProvider::NAMES))
                    .optional("apiKey", string()),
            )
            .required(
                "cms",
                object()
                    .required("provider", one_of(CmsProvider::NAMES))
                    .optional("projectId", string()),
            )
            .into()
    }
}
