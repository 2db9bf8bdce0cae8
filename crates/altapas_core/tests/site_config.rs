use altapas_core::{ConfigError, SectionId, SiteConfig};

#[test]
fn empty_json_yields_defaults() {
    let config: SiteConfig = serde_json::from_str("{}").expect("empty object should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn json_override_keeps_unspecified_defaults() {
    let config: SiteConfig = serde_json::from_value(serde_json::json!({
        "cta_target": "contact",
        "transition_ms": 250,
        "log_level": "warn"
    }))
    .expect("partial override should parse");

    config.validate().expect("override should validate");
    assert_eq!(config.cta_target, SectionId::new("contact"));
    assert_eq!(config.transition_ms, 250);
    assert_eq!(config.home_section, SectionId::home());
    assert_eq!(config.desktop_breakpoint_px, 768);
    assert_eq!(config.titles.len(), 4);
}

#[test]
fn unknown_field_is_rejected() {
    let err = serde_json::from_value::<SiteConfig>(serde_json::json!({ "transitionMs": 10 }))
        .expect_err("unknown field must fail");
    assert!(err.to_string().contains("transitionMs"), "unexpected error: {err}");
}

#[test]
fn titles_must_cover_home_section() {
    let config: SiteConfig = serde_json::from_value(serde_json::json!({
        "home_section": "inicio",
    }))
    .expect("override should parse");

    let err = config.validate().expect_err("missing home title must fail");
    assert_eq!(err, ConfigError::MissingHomeTitle(SectionId::new("inicio")));
}

#[test]
fn rejects_zero_transition() {
    let config = SiteConfig {
        transition_ms: 0,
        ..SiteConfig::default()
    };
    assert_eq!(
        config.validate().expect_err("zero duration must fail"),
        ConfigError::ZeroDuration("transition_ms")
    );
}

#[test]
fn rejects_toast_window_that_never_shows() {
    let config = SiteConfig {
        toast_enter_delay_ms: 500,
        toast_visible_ms: 400,
        ..SiteConfig::default()
    };
    let err = config.validate().expect_err("inverted toast window must fail");
    assert!(err.to_string().contains("toast_visible_ms"));
}

#[test]
fn rejects_unknown_log_level() {
    let config = SiteConfig {
        log_level: "verbose".to_string(),
        ..SiteConfig::default()
    };
    let err = config.validate().expect_err("unknown level must fail");
    assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
}

#[test]
fn rejects_title_keys_with_spaces() {
    let mut config = SiteConfig::default();
    config
        .titles
        .insert(SectionId::new("private dining"), "Private".to_string());
    let err = config.validate().expect_err("invalid title key must fail");
    assert!(matches!(
        err,
        ConfigError::InvalidSectionId { field: "titles", .. }
    ));
}
