use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::listener::Listener;
use crate::config::ScrollConfig;
use crate::model::{SectionAnchor, current_section, link_targets};
use crate::util::{query_all, scroll_y};

const ACTIVE_CLASS: &str = "active";

/// Highlights the `nav a` whose target section is currently in view.
pub fn bind_highlight(window: &Window, document: &Document, cfg: &ScrollConfig) -> Result<Vec<Listener>, JsValue> {
    let sections = query_all(document, "section");
    let links = query_all(document, "nav a");
    if links.is_empty() {
        return Ok(Vec::new());
    }
    let lookahead = cfg.nav_lookahead;
    highlight(&sections, &links, scroll_y(window), lookahead);

    let window_s = window.clone();
    let listener = Listener::new(window, "scroll", move |_| {
        highlight(&sections, &links, scroll_y(&window_s), lookahead);
    })?;
    Ok(vec![listener])
}

fn highlight(sections: &[HtmlElement], links: &[HtmlElement], scroll_y: f64, lookahead: f64) {
    // offsets are read live; the divider and reveal both move sections around
    let anchors: Vec<SectionAnchor> = sections
        .iter()
        .map(|s| SectionAnchor {
            id: s.get_attribute("id"),
            top: s.offset_top() as f64,
        })
        .collect();
    let current = current_section(&anchors, scroll_y, lookahead);
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let _ = link
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, link_targets(&href, current));
    }
}

/// Smooth-scrolls to the target of every in-page `a[href^="#"]`.
pub fn bind_anchors(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();
    for anchor in query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let anchor_el = anchor.clone();
        listeners.push(Listener::new(&anchor, "click", move |e| {
            e.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector
            let Some(target) = document.query_selector(&href).ok().flatten() else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?);
    }
    Ok(listeners)
}

