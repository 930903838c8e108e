//! Library configuration and host environment values.

use serde::Deserialize;

use crate::styling;

/// Client width below which a navbar considers itself in a mobile viewport.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Configuration for the widget set.
///
/// Usually deserialized from the host application's settings file. Style
/// entries are applied to the process-wide registry by [`install`](Self::install);
/// the rest is read at render time from the nearest [`Scope`](crate::Scope)
/// that provides a `NavkitConfig`, falling back to `NavkitConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavkitConfig {
    /// Viewport width (exclusive) under which `toggle_on_select` takes effect.
    pub mobile_breakpoint: u32,
    /// Extra or replacement style registrations.
    pub styles: Vec<StyleConfig>,
}

impl Default for NavkitConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            styles: Vec::new(),
        }
    }
}

/// One style registration entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    pub base_class: String,
    pub variants: Vec<String>,
    pub default: String,
}

impl NavkitConfig {
    /// Set the mobile breakpoint.
    pub fn mobile_breakpoint(mut self, width: u32) -> Self {
        self.mobile_breakpoint = width;
        self
    }

    /// Register every configured style in the global registry.
    ///
    /// Meant to run once during start-up, before the first render. Entries
    /// replace earlier registrations of the same base class.
    pub fn install(&self) {
        for style in &self.styles {
            styling::register(
                style.base_class.clone(),
                style.variants.iter().cloned(),
                style.default.clone(),
            );
        }
    }

    /// Check whether a viewport counts as mobile under this configuration.
    ///
    /// An unknown viewport (no client width reported) is never mobile.
    pub fn is_mobile(&self, viewport: Option<&Viewport>) -> bool {
        viewport
            .and_then(|v| v.client_width)
            .is_some_and(|width| width < self.mobile_breakpoint)
    }
}

/// The host's reported viewport, published through a scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Client width in layout units, if known.
    pub client_width: Option<u32>,
}

impl Viewport {
    pub fn new(client_width: u32) -> Self {
        Self {
            client_width: Some(client_width),
        }
    }
}
