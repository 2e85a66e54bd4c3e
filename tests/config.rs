use lassotext::{LassoConfig, LassoOverrides, LineCap, DEFAULTS};

#[test]
fn overrides_deserialize_from_json_and_merge() {
    let overrides: LassoOverrides = serde_json::from_str(
        r#"{
            "highlight_class": "picked",
            "highlight_style": {"background-color": "orange", "font-weight": "bold"},
            "line_width": 4.0,
            "line_cap": "square",
            "surface_style": {"z-index": "99"}
        }"#,
    )
    .unwrap();
    let cfg = LassoConfig::with_overrides(overrides);

    assert_eq!(cfg.highlight_class, "picked");
    assert_eq!(cfg.line.width, 4.0);
    assert_eq!(cfg.line.cap, LineCap::Square);
    // Style dictionaries merge key by key: overridden keys win, default
    // keys without an override survive.
    assert_eq!(cfg.highlight_style.get("background-color"), Some("orange"));
    assert_eq!(cfg.highlight_style.get("font-weight"), Some("bold"));
    assert_eq!(cfg.surface_style.get("z-index"), Some("99"));
    assert_eq!(cfg.surface_style.get("position"), Some("fixed"));
    // Untouched sections stay at their defaults.
    assert_eq!(cfg.unit_class, DEFAULTS.unit_class);
    assert_eq!(cfg.wrapper_style, DEFAULTS.wrapper_style);
}

#[test]
fn empty_json_object_is_all_defaults() {
    let overrides: LassoOverrides = serde_json::from_str("{}").unwrap();
    assert_eq!(LassoConfig::with_overrides(overrides), *DEFAULTS);
}
