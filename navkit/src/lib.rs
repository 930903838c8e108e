//! Composable Bootstrap-style widgets on a declarative render model.
//!
//! - [`styling`]: style variant registry and class-set computation.
//! - [`controlled`]: controlled/uncontrolled ownership of component values.
//! - [`context`]: implicit, scope-bound propagation of values to descendants.
//! - [`widgets`]: the navbar family, buttons and toggle buttons.

pub mod callback;
pub mod config;
pub mod context;
pub mod controlled;
pub mod error;
pub mod node;
pub mod state;
pub mod styling;
pub mod widgets;

pub use config::{NavkitConfig, Viewport};
pub use context::Scope;
pub use error::{Error, Result};
pub use node::{Component, Node, Render};
pub use state::State;

pub mod prelude {
    pub use crate::callback::{Action, Callback, SelectHandler, callback};
    pub use crate::config::{NavkitConfig, StyleConfig, Viewport};
    pub use crate::context::Scope;
    pub use crate::controlled::{Controlled, ControlledField, Uncontrollable};
    pub use crate::error::{Error, Result};
    pub use crate::node::{Component, Mount, Node, Render, render_children, render_node};
    pub use crate::state::State;
    pub use crate::styling::{BsProps, ClassSet, StyleVariant, compute_class_set, prefix};
    pub use crate::widgets::{
        Button, Grid, InputRef, InputType, NavItem, Navbar, NavbarBrand, NavbarCollapse,
        NavbarContext, NavbarHeader, NavbarProps, NavbarToggle, NavbarWrapper, Role,
        ToggleButton,
    };

    pub use markup::{Element, Event, EventKind};
}
