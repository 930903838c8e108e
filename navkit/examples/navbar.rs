//! Render an inverse navbar to HTML, toggle it, and render again.
//!
//! Run with: cargo run -p navkit --example navbar

use std::sync::Arc;

use navkit::prelude::*;
use simplelog::{Config, LevelFilter, SimpleLogger};

fn page(navbar: &Arc<Navbar>) -> Result<Element> {
    let links = Node::tree(
        Element::new("ul").class("nav navbar-nav"),
        [
            Node::component(NavItem::new("home").active(true).child("Home")),
            Node::component(NavItem::new("about").child("About")),
        ],
    );

    let props = NavbarProps::new()
        .inverse(true)
        .fixed_top(true)
        .toggle_on_select(true)
        .on_toggle(|expanded| log::info!("navbar expanded: {expanded}"))
        .on_select(|key, _| log::info!("selected '{key}'"))
        .child(Node::component(
            NavbarHeader::new()
                .child(Node::component(
                    NavbarBrand::new().child(Element::new("a").attr("href", "#").child(Element::text("navkit"))),
                ))
                .child(Node::component(NavbarToggle::new())),
        ))
        .child(Node::component(
            NavbarCollapse::new()
                .child(links)
                .child(Node::component(NavbarWrapper::text().pull_right(true).child("Signed in"))),
        ));

    let root = Scope::root();
    let config = NavkitConfig::default();
    let with_config = root.provide(config);
    let scope = with_config.provide(Viewport::new(480));
    navbar.render(&props, &scope)
}

fn main() -> Result<()> {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());

    let navbar = Arc::new(Navbar::default());

    let first = page(&navbar)?;
    println!("{}", markup::to_html(&first));

    if let Some(toggle) = markup::find_by_class(&first, "navbar-toggle") {
        toggle.fire(EventKind::Click);
    }

    let second = page(&navbar)?;
    println!("{}", markup::to_html(&second));
    Ok(())
}
