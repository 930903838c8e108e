//! Error types surfaced from render calls.

use thiserror::Error;

/// Result alias used by every render path.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering a component.
///
/// None of these are recovered internally; they propagate out of the
/// render call that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A style was resolved for a base class that was never registered.
    #[error("no style variants registered for base class '{base_class}'")]
    UnregisteredBaseClass { base_class: String },

    /// The requested variant is not in the base class's allowed set.
    #[error(
        "'{variant}' is not a valid style for '{base_class}' (allowed: {})",
        .allowed.join(", ")
    )]
    InvalidVariant {
        base_class: String,
        variant: String,
        allowed: Vec<String>,
    },

    /// A required property was not supplied.
    #[error("{component} requires a '{prop}' value")]
    MissingRequiredValue {
        component: &'static str,
        prop: &'static str,
    },
}
