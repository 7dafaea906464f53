//! Site configuration: schema, validation and loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── schema/        # Rule tree checked against untyped values
//! ├── section/       # Typed section definitions (one per top-level key)
//! ├── types/         # Color, FieldPath, diagnostics, literal enums
//! ├── preset.rs      # SiteConfig::flagship()
//! └── mod.rs         # SiteConfig, validation entry points (this file)
//! ```
//!
//! # Validation
//!
//! Input arrives as an untyped [`serde_json::Value`] (parsed from TOML or
//! JSON, or built inline). It is first checked against
//! [`SiteConfig::schema`], which reports every violation with its field
//! path, and only then deserialized, which fills in defaults.
//!
//! | Entry point                 | Missing sections | On failure                     |
//! |-----------------------------|------------------|--------------------------------|
//! | [`validate_config`]         | error            | logs each violation, `Err`     |
//! | [`validate_partial_config`] | allowed          | returns diagnostics, no output |

pub mod schema;
pub mod section;
pub mod types;
mod preset;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    AboutSection, BrandSection, EventsSection, FeaturesSection, FooterSection, HeroSection,
    IntegrationsSection, MetaSection, NavigationSection, NewsletterSection, PerformanceSection,
    PressSection, SocialSection, SponsorsSection, StatsSection, ThemeSection,
};

// Re-export from types/
pub use types::{Color, ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use schema::{Rule, Schema, nested, object};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration: the content and presentation of one site.
///
/// Construct it with [`validate_config`], [`SiteConfig::load`] or
/// [`SiteConfig::flagship`]. It is a plain value; pass it to whatever
/// renders the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub meta: MetaSection,
    pub brand: BrandSection,
    pub theme: ThemeSection,
    pub navigation: NavigationSection,
    pub social: SocialSection,
    pub hero: HeroSection,
    pub stats: StatsSection,
    pub events: EventsSection,
    pub about: AboutSection,
    pub sponsors: SponsorsSection,
    pub press: PressSection,
    pub newsletter: NewsletterSection,
    pub footer: FooterSection,
    pub features: FeaturesSection,
    pub integrations: IntegrationsSection,
    pub performance: PerformanceSection,
}

impl Schema for SiteConfig {
    fn schema() -> Rule {
        object()
            .required("meta", nested::<MetaSection>())
            .required("brand", nested::<BrandSection>())
            .required("theme", nested::<ThemeSection>())
            .required("navigation", nested::<NavigationSection>())
            .required("social", nested::<SocialSection>())
            .required("hero", nested::<HeroSection>())
            .required("stats", nested::<StatsSection>())
            .required("events", nested::<EventsSection>())
            .required("about", nested::<AboutSection>())
            .required("sponsors", nested::<SponsorsSection>())
            .required("press", nested::<PressSection>())
            .required("newsletter", nested::<NewsletterSection>())
            .required("footer", nested::<FooterSection>())
            .required("features", nested::<FeaturesSection>())
            .required("integrations", nested::<IntegrationsSection>())
            .required("performance", nested::<PerformanceSection>())
            .into()
    }
}

/// Site configuration with every top-level section optional.
///
/// Sections that are present have been validated in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<EventsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<SponsorsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press: Option<PressSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<NewsletterSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<IntegrationsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSection>,
}

impl PartialSiteConfig {
    /// True if no section is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// validation
// ============================================================================

/// Validate a complete site configuration.
///
/// Every violation is collected. On failure each one is logged as
/// `field: message` and the whole set is returned in
/// [`ConfigError::Diagnostics`]. On success unknown keys are reported as
/// warnings and the typed configuration has all defaults populated.
pub fn validate_config(input: &Value) -> Result<SiteConfig, ConfigError> {
    match parse_checked(&SiteConfig::schema(), input) {
        Ok((config, diag)) => {
            diag.print_warnings();
            Ok(config)
        }
        Err(diag) => {
            diag.log_errors();
            Err(ConfigError::Diagnostics(diag))
        }
    }
}

/// Validate a configuration in which every top-level section is optional.
///
/// Never logs. `validate_partial_config(&json!({}))` yields an empty
/// [`PartialSiteConfig`].
pub fn validate_partial_config(input: &Value) -> Result<PartialSiteConfig, ConfigDiagnostics> {
    parse_checked(&SiteConfig::schema().partial(), input).map(|(config, _)| config)
}

/// Check `input` against `rule`, then deserialize it.
///
/// Returns the value together with any warnings collected on the way.
fn parse_checked<T: DeserializeOwned>(
    rule: &Rule,
    input: &Value,
) -> Result<(T, ConfigDiagnostics), ConfigDiagnostics> {
    let mut diag = rule.check_root(input);
    if diag.has_errors() {
        return Err(diag);
    }

    // The rule tree mirrors the typed structs, so this only fails if they drift apart.
    match T::deserialize(input) {
        Ok(value) => Ok((value, diag)),
        Err(err) => {
            diag.error(FieldPath::root(), err.to_string());
            Err(diag)
        }
    }
}

impl SiteConfig {
    /// Re-validate a configuration built in code.
    pub fn check(&self) -> Result<(), ConfigDiagnostics> {
        let value = serde_json::to_value(self).map_err(|err| {
            let mut diag = ConfigDiagnostics::new();
            diag.error(FieldPath::root(), err.to_string());
            diag
        })?;
        Self::schema().check_root(&value).into_result()
    }

    /// Load and validate a `.toml` or `.json` configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let value = load_value(path)?;
        validate_config(&value)
    }

    /// Serialize as TOML, the format written by `apex init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ============================================================================
// loading
// ============================================================================

/// Read a configuration file into an untyped value.
///
/// The format is chosen by extension: `.toml` or `.json`.
pub fn load_value(path: &Path) -> Result<Value, ConfigError> {
    let read = || fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err));

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&read()?)?),
        Some("json") => Ok(serde_json::from_str(&read()?)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Check a section value against its schema and deserialize it.
/// Panics on errors or unknown fields (to catch typos in tests).
#[cfg(test)]
pub(crate) fn test_parse_section<T: Schema + DeserializeOwned>(value: Value) -> T {
    let diag = T::schema().check_root(&value);
    assert!(diag.is_empty(), "{diag}");
    assert!(
        diag.warnings().is_empty(),
        "test section has unknown fields: {:?}",
        diag.warnings()
    );
    serde_json::from_value(value).unwrap()
}

#[cfg(test)]
mod tests;
