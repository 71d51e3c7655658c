// Console logging and small DOM helpers shared by the page bindings

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, Window};

/// Debug-build console log; release builds stay silent.
pub fn clog(msg: &str) {
    if cfg!(debug_assertions) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn window_and_document() -> Option<(Window, Document)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Every match of `selector` that is an `HtmlElement`, in document order.
pub fn query_all(root: &impl AsRef<JsValue>, selector: &str) -> Vec<HtmlElement> {
    let list = if let Some(doc) = root.as_ref().dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.as_ref().dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Sets several inline style properties, stopping at the first rejection.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

pub fn set_style(el: &HtmlElement, name: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(name, value)
}

pub fn same_node(a: &Node, b: &Node) -> bool {
    a.is_same_node(Some(b))
}
