use super::*;
use serde_json::json;

fn cta_rule() -> Rule {
    object()
        .required("label", string().min_len(1))
        .required("href", string())
        .defaulted("variant", one_of(&["primary", "secondary", "outline", "ghost"]))
        .into()
}

fn messages(diag: &ConfigDiagnostics) -> Vec<(String, String)> {
    diag.errors()
        .iter()
        .map(|e| (e.field.as_str().to_string(), e.message.clone()))
        .collect()
}

#[test]
fn test_valid_object_has_no_errors() {
    let diag = cta_rule().check_root(&json!({ "label": "Go", "href": "/events" }));
    assert!(diag.is_empty());
    assert!(diag.warnings().is_empty());
}

#[test]
fn test_missing_required_field() {
    let diag = cta_rule().check_root(&json!({ "label": "Go" }));
    assert_eq!(messages(&diag), vec![("href".into(), "Required".into())]);
}

#[test]
fn test_invalid_enum_value() {
    let diag = cta_rule().check_root(&json!({ "label": "Go", "href": "/", "variant": "fancy" }));
    assert_eq!(diag.len(), 1);
    let err = &diag.errors()[0];
    assert_eq!(err.field.as_str(), "variant");
    assert_eq!(
        err.message,
        "Invalid enum value. Expected 'primary' | 'secondary' | 'outline' | 'ghost', received 'fancy'"
    );
    assert!(err.hint.is_some());
}

#[test]
fn test_enum_wrong_type() {
    let diag = cta_rule().check_root(&json!({ "label": "Go", "href": "/", "variant": 3 }));
    assert!(diag.errors()[0].message.ends_with("received number"));
}

#[test]
fn test_collects_every_violation() {
    let diag = cta_rule().check_root(&json!({ "label": "", "href": 5, "variant": "fancy" }));
    let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["label", "href", "variant"]);
}

#[test]
fn test_type_mismatch_message() {
    let diag = cta_rule().check_root(&json!({ "label": 1, "href": "/" }));
    assert_eq!(
        messages(&diag),
        vec![("label".into(), "Expected string, received number".into())]
    );
}

#[test]
fn test_root_must_be_object() {
    let diag = cta_rule().check_root(&json!("nope"));
    assert_eq!(diag.len(), 1);
    assert!(diag.errors()[0].field.is_root());
    assert_eq!(diag.errors()[0].message, "Expected object, received string");
}

#[test]
fn test_null_is_rejected() {
    let rule: Rule = object()
        .optional("subheadline", string())
        .defaulted("enabled", boolean())
        .into();

    assert!(rule.check_root(&json!({})).is_empty());

    let diag = rule.check_root(&json!({ "subheadline": null, "enabled": null }));
    assert_eq!(
        messages(&diag),
        vec![
            ("subheadline".into(), "Expected string, received null".into()),
            ("enabled".into(), "Expected boolean, received null".into()),
        ]
    );
}

#[test]
fn test_string_length_counts_utf16_units() {
    let rule: Rule = string().max_len(3, "too long").into();
    assert!(rule.check_root(&json!("•••")).is_empty());
    // One astral-plane char is two UTF-16 units.
    assert!(rule.check_root(&json!("a\u{1F3C0}")).is_empty());

    let diag = rule.check_root(&json!("ab\u{1F3C0}"));
    assert_eq!(diag.errors()[0].message, "too long");
}

#[test]
fn test_unknown_keys_warn() {
    let diag = cta_rule().check_root(&json!({ "label": "Go", "href": "/", "colour": "red" }));
    assert!(diag.is_empty());
    assert_eq!(diag.warnings().len(), 1);
    assert_eq!(diag.warnings()[0].0.as_str(), "colour");
}

#[test]
fn test_number_range_is_closed() {
    let rule: Rule = number().range(0.0, 1.0).into();
    assert!(rule.check_root(&json!(0)).is_empty());
    assert!(rule.check_root(&json!(1)).is_empty());

    let diag = rule.check_root(&json!(1.5));
    assert_eq!(diag.errors()[0].message, "Number must be less than or equal to 1");

    let diag = rule.check_root(&json!(-0.1));
    assert_eq!(
        diag.errors()[0].message,
        "Number must be greater than or equal to 0"
    );
}

#[test]
fn test_array_bounds_and_item_paths() {
    let rule: Rule = array(object().required("label", string().min_len(1)))
        .min_items(1)
        .max_items(2)
        .into();

    let diag = rule.check_root(&json!([]));
    assert_eq!(diag.errors()[0].message, "Array must contain at least 1 element(s)");

    let diag = rule.check_root(&json!([{ "label": "a" }, { "label": "" }, { "label": "c" }]));
    assert_eq!(
        messages(&diag),
        vec![
            ("".into(), "Array must contain at most 2 element(s)".into()),
            (
                "1.label".into(),
                "String must contain at least 1 character(s)".into()
            ),
        ]
    );
}

#[test]
fn test_string_max_len_custom_message() {
    let rule: Rule = string().max_len(3, "too long").into();
    assert!(rule.check_root(&json!("abc")).is_empty());
    assert_eq!(rule.check_root(&json!("abcd")).errors()[0].message, "too long");
}

#[test]
fn test_record_checks_every_value() {
    let rule = record(string());
    let diag = rule.check_root(&json!({ "sm": "0.25rem", "md": 4 }));
    assert_eq!(
        messages(&diag),
        vec![("md".into(), "Expected string, received number".into())]
    );
}

#[test]
fn test_union_matches_any_arm() {
    let rule = union([
        Rule::from(string()),
        Rule::from(
            object()
                .required("prefix", string())
                .required("highlight", string()),
        ),
    ]);

    assert!(rule.check_root(&json!("Experience It Live")).is_empty());
    assert!(
        rule.check_root(&json!({ "prefix": "Experience", "highlight": "Live" }))
            .is_empty()
    );

    let diag = rule.check_root(&json!({ "prefix": "Experience" }));
    assert_eq!(messages(&diag), vec![("".into(), "Invalid input".into())]);
}

#[test]
fn test_partial_is_shallow() {
    let rule = object()
        .required("hero", object().required("subheadline", string()))
        .required("meta", object().required("siteName", string()));
    let rule = Rule::from(rule).partial();

    assert!(rule.check_root(&json!({})).is_empty());

    // A present section is still validated in full.
    let diag = rule.check_root(&json!({ "hero": {} }));
    assert_eq!(
        messages(&diag),
        vec![("hero.subheadline".into(), "Required".into())]
    );
}
