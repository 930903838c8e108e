use navkit::styling::{self, StyleVariant};
use navkit::{NavkitConfig, Viewport};

#[test]
fn test_default_config() {
    let config = NavkitConfig::default();
    assert_eq!(config.mobile_breakpoint, 768);
    assert!(config.styles.is_empty());
}

#[test]
fn test_parse_empty_uses_defaults() {
    let config: NavkitConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, NavkitConfig::default());
}

#[test]
fn test_parse_full() {
    let config: NavkitConfig = serde_json::from_str(
        r#"{
            "mobile_breakpoint": 992,
            "styles": [
                { "base_class": "label", "variants": ["default", "info"], "default": "default" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(config.mobile_breakpoint, 992);
    assert_eq!(config.styles.len(), 1);
    assert_eq!(config.styles[0].base_class, "label");
    assert_eq!(config.styles[0].variants, vec!["default", "info"]);
}

#[test]
fn test_parse_rejects_incomplete_style() {
    let result: Result<NavkitConfig, _> =
        serde_json::from_str(r#"{ "styles": [{ "base_class": "label" }] }"#);
    assert!(result.is_err());
}

#[test]
fn test_install_registers_styles() {
    let config: NavkitConfig = serde_json::from_str(
        r#"{
            "styles": [
                { "base_class": "test-config-well", "variants": ["sm", "lg"], "default": "sm" }
            ]
        }"#,
    )
    .unwrap();

    config.install();

    assert_eq!(
        styling::resolve("test-config-well", None),
        Ok(StyleVariant::from("sm"))
    );
    assert!(styling::resolve("test-config-well", Some(&StyleVariant::PRIMARY)).is_err());
    assert!(styling::registered_base_classes().contains(&"test-config-well".to_string()));
}

#[test]
fn test_is_mobile() {
    let config = NavkitConfig::default();

    assert!(config.is_mobile(Some(&Viewport::new(320))));
    assert!(config.is_mobile(Some(&Viewport::new(767))));
    assert!(!config.is_mobile(Some(&Viewport::new(768))));
    assert!(!config.is_mobile(Some(&Viewport::new(1280))));
    assert!(!config.is_mobile(Some(&Viewport::default())));
    assert!(!config.is_mobile(None));
}

#[test]
fn test_custom_breakpoint() {
    let config = NavkitConfig::default().mobile_breakpoint(1024);
    assert!(config.is_mobile(Some(&Viewport::new(800))));
}
