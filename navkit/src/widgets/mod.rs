//! Widgets built on the styling, context and controlled-state layers.

pub mod button;
pub mod grid;
pub mod nav_item;
pub mod navbar;
pub mod toggle_button;

pub use button::Button;
pub use grid::Grid;
pub use nav_item::NavItem;
pub use navbar::{
    Expanded, Navbar, NavbarBrand, NavbarCollapse, NavbarContext, NavbarHeader, NavbarProps,
    NavbarToggle, NavbarView, NavbarWrapper, Role,
};
pub use toggle_button::{InputRef, InputType, ToggleButton};
