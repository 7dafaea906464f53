//! End-to-end validation scenarios over the whole configuration.

use super::*;
use serde_json::json;
use std::fs;

fn flagship_value() -> Value {
    serde_json::to_value(SiteConfig::flagship()).unwrap()
}

fn violations(input: &Value) -> ConfigDiagnostics {
    match validate_config(input) {
        Ok(_) => panic!("expected validation to fail"),
        Err(err) => err.diagnostics().cloned().unwrap(),
    }
}

#[test]
fn test_flagship_round_trip() {
    let config = validate_config(&flagship_value()).unwrap();
    assert_eq!(config, SiteConfig::flagship());
}

#[test]
fn test_defaults_populated() {
    let mut value = flagship_value();
    value["hero"]["background"]
        .as_object_mut()
        .unwrap()
        .remove("overlayOpacity");
    value["events"]["items"][0]
        .as_object_mut()
        .unwrap()
        .remove("featured");
    value["newsletter"].as_object_mut().unwrap().remove("placeholder");
    value["theme"]["animations"] = json!({});

    let config = validate_config(&value).unwrap();
    assert_eq!(config.hero.background.overlay_opacity, 0.7);
    assert!(!config.events.items.as_ref().unwrap()[0].featured);
    assert_eq!(config.newsletter.placeholder, "Enter your email");
    assert_eq!(config.theme.animations, section::Animations::default());
}

#[test]
fn test_long_description_fails() {
    let mut value = flagship_value();
    value["meta"]["description"] = json!("x".repeat(161));

    let diag = violations(&value);
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.errors()[0].field.as_str(), "meta.description");
}

#[test]
fn test_overlay_opacity_out_of_range_fails() {
    let mut value = flagship_value();
    value["hero"]["background"]["overlayOpacity"] = json!(1.5);

    let diag = violations(&value);
    assert_eq!(
        diag.errors()[0].field.as_str(),
        "hero.background.overlayOpacity"
    );
}

#[test]
fn test_unknown_cta_variant_fails() {
    let mut value = flagship_value();
    value["hero"]["ctas"][1]["variant"] = json!("fancy");

    let diag = violations(&value);
    assert_eq!(diag.errors()[0].field.as_str(), "hero.ctas.1.variant");
    assert!(diag.errors()[0].message.contains("received 'fancy'"));
}

#[test]
fn test_seven_stats_fail() {
    let mut value = flagship_value();
    let item = value["stats"]["items"][0].clone();
    value["stats"]["items"] = json!(vec![item; 7]);

    let diag = violations(&value);
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.errors()[0].field.as_str(), "stats.items");
    assert!(diag.errors()[0].message.contains("at most 6"));
}

#[test]
fn test_remaining_above_total_passes() {
    let mut value = flagship_value();
    value["events"]["items"][0]["ticketsRemaining"] = json!(500);
    value["events"]["items"][0]["totalTickets"] = json!(200);

    let config = validate_config(&value).unwrap();
    let first = &config.events.items.unwrap()[0];
    assert_eq!(first.tickets_remaining, Some(500.0));
    assert_eq!(first.total_tickets, Some(200.0));
}

#[test]
fn test_every_violation_is_reported() {
    let mut value = flagship_value();
    value["meta"]["siteUrl"] = json!("not a url");
    value["theme"]["layouts"]["hero"] = json!("split");
    value["navigation"]["mainNav"][2]["href"] = json!("events");
    value["performance"]["imageOptimization"]["quality"] = json!(120);
    value.as_object_mut().unwrap().remove("features");

    let diag = violations(&value);
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "meta.siteUrl",
            "theme.layouts.hero",
            "navigation.mainNav.2.href",
            "features",
            "performance.imageOptimization.quality",
        ]
    );
    assert_eq!(diag.errors_at("features").next().unwrap().message, "Required");
}

#[test]
fn test_null_is_not_absent() {
    let mut value = flagship_value();
    value["meta"]["twitterHandle"] = Value::Null;
    value["events"]["items"][0]["price"] = Value::Null;
    value["meta"]["locale"] = Value::Null;

    let diag = violations(&value);
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["meta.twitterHandle", "meta.locale", "events.items.0.price"]
    );
    assert_eq!(
        diag.errors_at("meta.twitterHandle").next().unwrap().message,
        "Expected string, received null"
    );

    // Omitting the optional field is still fine.
    let mut value = flagship_value();
    value["meta"].as_object_mut().unwrap().remove("twitterHandle");
    let config = validate_config(&value).unwrap();
    assert_eq!(config.meta.twitter_handle, None);
}

#[test]
fn test_partial_rejects_null_sections() {
    let diag = validate_partial_config(&json!({ "meta": null, "stats": null })).unwrap_err();
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["meta", "stats"]);
}

#[test]
fn test_description_length_counts_utf16_units() {
    let mut value = flagship_value();
    // 100 emoji are 100 chars but 200 UTF-16 units.
    value["meta"]["description"] = json!("\u{1F3C0}".repeat(100));
    let diag = violations(&value);
    assert_eq!(
        diag.errors_at("meta.description").next().unwrap().message,
        "Meta description should be under 160 characters"
    );

    value["meta"]["description"] = json!("\u{1F3C0}".repeat(80));
    assert!(validate_config(&value).is_ok());
}

#[test]
fn test_unknown_keys_are_warnings() {
    let mut value = flagship_value();
    value["hero"]["tagline"] = json!("extra");
    value["extras"] = json!({});

    let diag = SiteConfig::schema().check_root(&value);
    assert!(diag.is_empty());
    let warned: Vec<_> = diag.warnings().iter().map(|(f, _)| f.as_str()).collect();
    assert_eq!(warned, vec!["hero.tagline", "extras"]);

    let config = validate_config(&value).unwrap();
    assert_eq!(config, SiteConfig::flagship());
}

// ============================================================================
// partial validation
// ============================================================================

#[test]
fn test_partial_empty_object() {
    let partial = validate_partial_config(&json!({})).unwrap();
    assert!(partial.is_empty());
    assert_eq!(partial.meta, None);
}

#[test]
fn test_partial_present_sections_are_complete() {
    let flagship = flagship_value();
    let partial =
        validate_partial_config(&json!({ "stats": flagship["stats"].clone() })).unwrap();
    assert!(!partial.is_empty());
    assert_eq!(partial.stats, Some(SiteConfig::flagship().stats));
    assert_eq!(partial.hero, None);

    let diag = validate_partial_config(&json!({ "hero": { "subheadline": "x" } })).unwrap_err();
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["hero.headline", "hero.ctas", "hero.background"]);
}

#[test]
fn test_partial_rejects_non_object() {
    let diag = validate_partial_config(&json!([])).unwrap_err();
    assert!(diag.errors()[0].field.is_root());
}

// ============================================================================
// typed re-validation
// ============================================================================

#[test]
fn test_check_typed_value() {
    let mut config = SiteConfig::flagship();
    config.stats.items.clear();
    config.events.fomo.scarcity_threshold = 2.0;

    let diag = config.check().unwrap_err();
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["stats.items", "events.fomo.scarcityThreshold"]);
}

// ============================================================================
// loading
// ============================================================================

#[test]
fn test_load_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(&path, SiteConfig::flagship().to_toml().unwrap()).unwrap();

    assert_eq!(SiteConfig::load(&path).unwrap(), SiteConfig::flagship());
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, flagship_value().to_string()).unwrap();

    assert_eq!(SiteConfig::load(&path).unwrap(), SiteConfig::flagship());
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("site.yaml");
    fs::write(&yaml, "meta: {}").unwrap();
    assert!(matches!(
        load_value(&yaml),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(load_value(&missing), Err(ConfigError::Io(..))));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[meta\nsiteName = 1").unwrap();
    assert!(matches!(load_value(&broken), Err(ConfigError::Toml(_))));

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, r#"{ "meta": {} }"#).unwrap();
    let err = SiteConfig::load(&invalid).unwrap_err();
    assert!(err.diagnostics().is_some_and(|d| d.len() > 1));
}
