use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, TouchEvent, Window};

use super::listener::Listener;
use crate::config::DividerConfig;
use crate::state::DividerDrag;
use crate::util::{by_id, set_style, viewport_height};

const DRAGGING_CLASS: &str = "dragging";

/// Press on `#divider` and drag to resize `#hero`.
pub fn bind(window: &Window, document: &Document, cfg: &DividerConfig) -> Result<Vec<Listener>, JsValue> {
    let (Some(divider), Some(hero)) = (by_id(document, "divider"), by_id(document, "hero")) else {
        return Ok(Vec::new());
    };
    let drag = Rc::new(RefCell::new(DividerDrag::default()));
    let margin = cfg.edge_margin;
    let mut listeners = Vec::with_capacity(6);

    // Mouse
    {
        let drag = drag.clone();
        let divider_el = divider.clone();
        listeners.push(Listener::new(&divider, "mousedown", move |e| {
            drag.borrow_mut().press();
            let _ = divider_el.class_list().add_1(DRAGGING_CLASS);
            e.prevent_default();
        })?);
    }
    {
        let drag = drag.clone();
        let divider_el = divider.clone();
        listeners.push(Listener::new(window, "mouseup", move |_| {
            end_drag(&drag, &divider_el);
        })?);
    }
    {
        let drag = drag.clone();
        let hero = hero.clone();
        let window_m = window.clone();
        listeners.push(Listener::new(window, "mousemove", move |e| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            resize_hero(&drag, &hero, &window_m, e.client_y() as f64, margin);
        })?);
    }

    // Touch
    {
        let drag = drag.clone();
        let divider_el = divider.clone();
        listeners.push(Listener::with_passive(&divider, "touchstart", false, move |e| {
            drag.borrow_mut().press();
            let _ = divider_el.class_list().add_1(DRAGGING_CLASS);
            // keep the browser from synthesizing mouse events for this touch
            e.prevent_default();
        })?);
    }
    {
        let drag = drag.clone();
        let hero = hero.clone();
        let window_t = window.clone();
        listeners.push(Listener::with_passive(window, "touchmove", false, move |e| {
            if !drag.borrow().active {
                return;
            }
            let Some(te) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(touch) = te.touches().get(0) else {
                return;
            };
            e.prevent_default();
            resize_hero(&drag, &hero, &window_t, touch.client_y() as f64, margin);
        })?);
    }
    for kind in ["touchend", "touchcancel"] {
        let drag = drag.clone();
        let divider_el = divider.clone();
        listeners.push(Listener::new(window, kind, move |_| {
            end_drag(&drag, &divider_el);
        })?);
    }

    Ok(listeners)
}

fn end_drag(drag: &RefCell<DividerDrag>, divider: &HtmlElement) {
    drag.borrow_mut().release();
    let _ = divider.class_list().remove_1(DRAGGING_CLASS);
}

fn resize_hero(drag: &RefCell<DividerDrag>, hero: &HtmlElement, window: &Window, client_y: f64, margin: f64) {
    let Some(height) = drag.borrow().track(client_y, viewport_height(window), margin) else {
        return;
    };
    let _ = set_style(hero, "height", &format!("{}px", height));
}
