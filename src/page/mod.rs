//! Behaviors bound straight onto the static page markup.
//!
//! [`PageBindings`] owns every listener, observer and pending frame it creates;
//! dropping it detaches them all.

pub mod divider;
pub mod gallery;
pub mod listener;
pub mod nav;
pub mod parallax;
pub mod reveal;

use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::functional::UseReducerDispatcher;

use crate::config::PortfolioConfig;
use crate::state::LightboxState;
use crate::util::{clog, window_and_document};
use listener::Listener;
use parallax::ParallaxBinding;
use reveal::RevealBinding;

pub struct PageBindings {
    _listeners: Vec<Listener>,
    _reveal: Option<RevealBinding>,
    _parallax: Option<ParallaxBinding>,
}

/// Logs a behavior that failed to bind so the others still come up.
fn keep<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            clog(&format!("page: {} not bound: {:?}", what, e));
            None
        }
    }
}

impl PageBindings {
    pub fn attach(
        config: Rc<PortfolioConfig>,
        lightbox: UseReducerDispatcher<LightboxState>,
    ) -> Result<Self, JsValue> {
        let (window, document) =
            window_and_document().ok_or_else(|| JsValue::from_str("no window or document"))?;

        let mut listeners = Vec::new();
        for (what, bound) in [
            ("divider", divider::bind(&window, &document, &config.divider)),
            ("nav highlight", nav::bind_highlight(&window, &document, &config.scroll)),
            ("anchors", nav::bind_anchors(&document)),
            ("gallery", gallery::bind(&document, &config.lightbox, lightbox)),
        ] {
            listeners.extend(keep(what, bound).unwrap_or_default());
        }
        let reveal = keep("reveal", RevealBinding::attach(&document, &config.reveal));
        let parallax = keep(
            "parallax",
            ParallaxBinding::attach(&window, &document, config.parallax.clone()),
        );

        clog(&format!("page: {} listeners bound", listeners.len()));
        Ok(Self {
            _listeners: listeners,
            _reveal: reveal,
            _parallax: parallax,
        })
    }
}
