use navkit::Error;
use navkit::styling::{
    self, BsProps, ClassSet, StyleRegistry, StyleVariant, compute_class_set, prefix,
};

// ============================================================================
// Registry
// ============================================================================

fn registry() -> StyleRegistry {
    let mut registry = StyleRegistry::new();
    registry.register("panel", ["default", "primary", "danger"], "default");
    registry
}

#[test]
fn test_resolve_allowed_variant_passes_through() {
    let registry = registry();
    for name in ["default", "primary", "danger"] {
        let variant = StyleVariant::from(name);
        assert_eq!(registry.resolve("panel", Some(&variant)), Ok(variant.clone()));
    }
}

#[test]
fn test_resolve_missing_variant_uses_default() {
    let registry = registry();
    assert_eq!(registry.resolve("panel", None), Ok(StyleVariant::DEFAULT));
}

#[test]
fn test_resolve_invalid_variant() {
    let registry = registry();
    let err = registry
        .resolve("panel", Some(&StyleVariant::INVERSE))
        .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidVariant {
            base_class: "panel".to_string(),
            variant: "inverse".to_string(),
            allowed: vec![
                "default".to_string(),
                "primary".to_string(),
                "danger".to_string()
            ],
        }
    );
}

#[test]
fn test_resolve_unregistered_base_class() {
    let registry = registry();
    let err = registry.resolve("well", None).unwrap_err();
    assert_eq!(
        err,
        Error::UnregisteredBaseClass {
            base_class: "well".to_string()
        }
    );
}

#[test]
fn test_reregister_overwrites() {
    let mut registry = registry();
    registry.register("panel", ["default", "inverse"], "inverse");

    assert_eq!(registry.resolve("panel", None), Ok(StyleVariant::INVERSE));
    assert!(registry.resolve("panel", Some(&StyleVariant::PRIMARY)).is_err());
    assert_eq!(registry.allowed("panel").map(<[_]>::len), Some(2));
}

#[test]
fn test_default_joins_allowed_set() {
    let mut registry = StyleRegistry::new();
    registry.register("label", ["info"], "default");

    let allowed = registry.allowed("label").unwrap();
    assert!(allowed.contains(&StyleVariant::DEFAULT));
    assert_eq!(registry.default_for("label"), Some(&StyleVariant::DEFAULT));
}

#[test]
fn test_builtins_include_navbar_and_btn() {
    let registry = StyleRegistry::with_builtins();

    assert!(registry.is_registered("navbar"));
    assert!(registry.is_registered("btn"));
    assert_eq!(
        registry.resolve("navbar", Some(&StyleVariant::INVERSE)),
        Ok(StyleVariant::INVERSE)
    );
    assert!(registry.resolve("navbar", Some(&StyleVariant::PRIMARY)).is_err());
}

#[test]
fn test_global_register_last_writer_wins() {
    styling::register("test-global-badge", ["default", "info"], "default");
    styling::register("test-global-badge", ["default", "info", "warning"], "info");

    assert_eq!(
        styling::resolve("test-global-badge", None),
        Ok(StyleVariant::INFO)
    );
    assert_eq!(
        styling::resolve("test-global-badge", Some(&StyleVariant::WARNING)),
        Ok(StyleVariant::WARNING)
    );
    assert!(styling::registered_base_classes().contains(&"test-global-badge".to_string()));
}

#[test]
fn test_error_display() {
    let err = Error::InvalidVariant {
        base_class: "navbar".to_string(),
        variant: "primary".to_string(),
        allowed: vec!["default".to_string(), "inverse".to_string()],
    };
    let display = err.to_string();
    assert!(display.contains("navbar"));
    assert!(display.contains("primary"));
    assert!(display.contains("default, inverse"));
}

// ============================================================================
// Class sets
// ============================================================================

#[test]
fn test_prefix() {
    assert_eq!(prefix("navbar", "fixed-top"), "navbar-fixed-top");
}

#[test]
fn test_class_set_contains_exactly_base_variant_and_flags() {
    let set = compute_class_set(
        "navbar",
        &StyleVariant::INVERSE,
        [("fixed-top", true), ("fixed-bottom", false)],
    );

    let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "navbar",
            "navbar-inverse",
            "navbar-fixed-top",
            "navbar-fixed-bottom"
        ]
    );
    assert_eq!(set.get("navbar-fixed-top"), Some(true));
    assert_eq!(set.get("navbar-fixed-bottom"), Some(false));
    assert_eq!(set.to_class_string(), "navbar navbar-inverse navbar-fixed-top");
}

#[test]
fn test_class_set_is_pure() {
    let flags = [("static-top", true)];
    let a = compute_class_set("navbar", &StyleVariant::DEFAULT, flags);
    let b = compute_class_set("navbar", &StyleVariant::DEFAULT, flags);
    assert_eq!(a, b);
}

#[test]
fn test_class_set_insert_overwrites_in_place() {
    let mut set = ClassSet::new().with("a", true).with("b", true);
    set.insert("a", false);

    assert_eq!(set.len(), 2);
    assert!(!set.is_on("a"));
    assert_eq!(set.to_class_string(), "b");
}

#[test]
fn test_bs_props_resolve_through_global_registry() {
    let set = BsProps::new("navbar")
        .style(Some(StyleVariant::INVERSE))
        .class_set([("fluid", false)])
        .unwrap();
    assert!(set.is_on("navbar-inverse"));
    assert!(set.contains_key("navbar-fluid"));

    let err = BsProps::new("test-never-registered").class_set([]).unwrap_err();
    assert!(matches!(err, Error::UnregisteredBaseClass { .. }));
}
