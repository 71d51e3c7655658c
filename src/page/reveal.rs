use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::model::stagger_delay_secs;
use crate::state::RevealTracker;
use crate::util::{by_id, clog, query_all, same_node, set_styles};

/// Fades every non-hero section in the first time it scrolls into view.
pub struct RevealBinding {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl RevealBinding {
    pub fn attach(document: &Document, cfg: &RevealConfig) -> Result<Self, JsValue> {
        let hero = by_id(document, "hero");
        let sections: Vec<HtmlElement> = query_all(document, "section")
            .into_iter()
            .filter(|s| !hero.as_ref().is_some_and(|h| same_node(s, h)))
            .collect();

        let section_offset = format!("translateY({}px)", cfg.section_offset_px);
        for section in &sections {
            set_styles(
                section,
                &[
                    ("opacity", "0"),
                    ("transform", section_offset.as_str()),
                    ("transition", cfg.transition.as_str()),
                ],
            )?;
        }

        let sections = Rc::new(sections);
        let tracker = Rc::new(RefCell::new(RevealTracker::new(sections.len())));
        let callback = {
            let sections = sections.clone();
            let tracker = tracker.clone();
            let cfg = cfg.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let Some(idx) = sections.iter().position(|s| same_node(s, &target)) else {
                        continue;
                    };
                    if tracker.borrow_mut().reveal(idx) {
                        reveal_section(&sections[idx], &cfg);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(cfg.threshold));
        init.set_root_margin(&cfg.root_margin);
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                clog(&format!("reveal: no IntersectionObserver ({:?}), showing all sections", e));
                for (idx, section) in sections.iter().enumerate() {
                    if tracker.borrow_mut().reveal(idx) {
                        reveal_section(section, cfg);
                    }
                }
                return Ok(Self {
                    observer: None,
                    _callback: None,
                });
            }
        };
        for section in sections.iter() {
            observer.observe(section);
        }
        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn reveal_section(section: &HtmlElement, cfg: &RevealConfig) {
    let _ = set_styles(section, &[("opacity", "1"), ("transform", "translateY(0)")]);

    let items = query_all(section, &cfg.item_selector);
    if items.is_empty() {
        return;
    }
    let item_offset = format!("translateY({}px)", cfg.item_offset_px);
    for (i, item) in items.iter().enumerate() {
        let delay = format!("{}s", stagger_delay_secs(i, cfg.stagger_ms));
        let _ = set_styles(
            item,
            &[
                ("opacity", "0"),
                ("transform", item_offset.as_str()),
                ("transition", cfg.transition.as_str()),
                ("transition-delay", delay.as_str()),
            ],
        );
    }
    Timeout::new(cfg.item_kickoff_ms, move || {
        for item in &items {
            let _ = set_styles(item, &[("opacity", "1"), ("transform", "translateY(0)")]);
        }
    })
    .forget();
}
