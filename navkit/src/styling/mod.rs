//! Style variants and CSS class computation.

mod class_set;
mod registry;
mod variant;

pub use class_set::{BsProps, ClassSet, compute_class_set, prefix};
pub use registry::{
    StyleRegistration, StyleRegistry, register, registered_base_classes, resolve, snapshot,
};
pub use variant::StyleVariant;
