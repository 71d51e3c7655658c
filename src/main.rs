use std::rc::Rc;
use web_sys::Element;

mod components;
mod config;
mod model;
mod page;
mod state;
mod util;

use components::{App, AppProps};
use config::PortfolioConfig;
use util::{clog, window_and_document};

/// Yew clears whatever it mounts into, so overlays get a host of their own.
const OVERLAY_ROOT_ID: &str = "overlay-root";

fn overlay_root() -> Option<Element> {
    let (_, document) = window_and_document()?;
    if let Some(root) = document.get_element_by_id(OVERLAY_ROOT_ID) {
        return Some(root);
    }
    let root = document.create_element("div").ok()?;
    root.set_id(OVERLAY_ROOT_ID);
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn main() {
    let config = Rc::new(PortfolioConfig::load());
    let Some(root) = overlay_root() else {
        clog("no document body to mount into");
        return;
    };
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
