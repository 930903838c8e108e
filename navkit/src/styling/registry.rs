//! Registry of allowed style variants per base class.
//!
//! Built-in component families register themselves through `inventory`:
//!
//! ```ignore
//! inventory::submit! {
//!     StyleRegistration::new("navbar", &["default", "inverse"], "default")
//! }
//! ```
//!
//! These entries seed the process-wide registry on first access. Further
//! [`register`] calls (for instance from
//! [`NavkitConfig::install`](crate::NavkitConfig::install)) replace the entry
//! for their base class, so the last writer wins.
//!
//! Registration is expected to finish during start-up, before rendering
//! begins. Afterwards the registry is only read.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use super::StyleVariant;
use crate::error::{Error, Result};

/// Compile-time style registration entry for inventory.
pub struct StyleRegistration {
    /// Base class name, e.g. `"navbar"`.
    pub base_class: &'static str,
    /// Allowed variant names.
    pub variants: &'static [&'static str],
    /// Variant used when none is requested.
    pub default: &'static str,
}

impl StyleRegistration {
    /// Create a new style registration.
    pub const fn new(
        base_class: &'static str,
        variants: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            base_class,
            variants,
            default,
        }
    }
}

inventory::collect!(StyleRegistration);

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyleEntry {
    allowed: Vec<StyleVariant>,
    default: StyleVariant,
}

/// Table of base classes and their allowed variants.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: HashMap<String, StyleEntry>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every inventory-submitted registration.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for registration in inventory::iter::<StyleRegistration>() {
            registry.register(
                registration.base_class,
                registration.variants.iter().copied(),
                registration.default,
            );
        }
        registry
    }

    /// Register (or replace) the allowed variants for a base class.
    ///
    /// The default is added to the allowed set when missing, so that a
    /// resolved style is always a member of it.
    pub fn register<I, V>(
        &mut self,
        base_class: impl Into<String>,
        variants: I,
        default: impl Into<StyleVariant>,
    ) where
        I: IntoIterator<Item = V>,
        V: Into<StyleVariant>,
    {
        let base_class = base_class.into();
        let default = default.into();
        let mut allowed: Vec<StyleVariant> = Vec::new();
        for variant in variants.into_iter().map(Into::into) {
            if !allowed.contains(&variant) {
                allowed.push(variant);
            }
        }
        if !allowed.contains(&default) {
            log::warn!("default style '{default}' for '{base_class}' is not among its variants; allowing it");
            allowed.push(default.clone());
        }

        log::debug!(
            "registered styles for '{}': [{}] (default '{}')",
            base_class,
            allowed.iter().map(StyleVariant::as_str).collect::<Vec<_>>().join(", "),
            default
        );
        self.entries.insert(base_class, StyleEntry { allowed, default });
    }

    /// Resolve the active variant for a base class.
    ///
    /// `None` selects the registered default.
    pub fn resolve(&self, base_class: &str, requested: Option<&StyleVariant>) -> Result<StyleVariant> {
        let entry = self
            .entries
            .get(base_class)
            .ok_or_else(|| Error::UnregisteredBaseClass {
                base_class: base_class.to_string(),
            })?;

        match requested {
            None => Ok(entry.default.clone()),
            Some(variant) if entry.allowed.contains(variant) => Ok(variant.clone()),
            Some(variant) => Err(Error::InvalidVariant {
                base_class: base_class.to_string(),
                variant: variant.to_string(),
                allowed: entry.allowed.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    /// Allowed variants for a base class.
    pub fn allowed(&self, base_class: &str) -> Option<&[StyleVariant]> {
        self.entries.get(base_class).map(|e| e.allowed.as_slice())
    }

    /// Default variant for a base class.
    pub fn default_for(&self, base_class: &str) -> Option<&StyleVariant> {
        self.entries.get(base_class).map(|e| &e.default)
    }

    pub fn is_registered(&self, base_class: &str) -> bool {
        self.entries.contains_key(base_class)
    }

    /// Registered base classes, sorted.
    pub fn base_classes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

static GLOBAL: OnceLock<RwLock<StyleRegistry>> = OnceLock::new();

fn global() -> &'static RwLock<StyleRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(StyleRegistry::with_builtins()))
}

/// Register styles in the process-wide registry. Last writer wins.
pub fn register<I, V>(base_class: impl Into<String>, variants: I, default: impl Into<StyleVariant>)
where
    I: IntoIterator<Item = V>,
    V: Into<StyleVariant>,
{
    let mut guard = global()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.register(base_class, variants, default);
}

/// Resolve a style against the process-wide registry.
pub fn resolve(base_class: &str, requested: Option<&StyleVariant>) -> Result<StyleVariant> {
    global()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .resolve(base_class, requested)
}

/// Base classes currently known to the process-wide registry.
pub fn registered_base_classes() -> Vec<String> {
    global()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .base_classes()
}

/// Copy of the process-wide registry.
pub fn snapshot() -> StyleRegistry {
    global()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
