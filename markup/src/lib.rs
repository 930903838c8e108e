pub mod element;
pub mod event;
pub mod render;
pub mod types;

pub use element::{find_all, find_by_class, find_element, Content, Element};
pub use event::{Event, Listener};
pub use render::to_html;
pub use types::*;
