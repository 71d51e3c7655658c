use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::listener::Listener;
use crate::config::ParallaxConfig;
use crate::model::{HeroParallax, cloud_offset, section_shift};
use crate::state::FrameScheduler;
use crate::util::{by_id, query_all, query_one, scroll_y, set_style, viewport_height};

/// Elements moved by the parallax pass, looked up once.
struct ParallaxTargets {
    hero: Option<HtmlElement>,
    hero_left: Option<HtmlElement>,
    hero_right: Option<HtmlElement>,
    hero_fade: Option<HtmlElement>,
    clouds: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl ParallaxTargets {
    fn collect(document: &Document) -> Self {
        let sections = query_all(document, "section")
            .into_iter()
            .filter(|s| s.id() != "hero")
            .collect();
        Self {
            hero: by_id(document, "hero"),
            hero_left: query_one(document, ".hero-left"),
            hero_right: query_one(document, ".hero-right"),
            hero_fade: query_one(document, ".hero-fade"),
            clouds: query_all(document, ".cloud"),
            sections,
        }
    }

    fn apply(&self, window: &Window, scroll_y: f64, cfg: &ParallaxConfig) {
        let vh = viewport_height(window);
        let hero_height = self
            .hero
            .as_ref()
            .map(|h| h.offset_height() as f64)
            .unwrap_or(vh);
        let p = HeroParallax::compute(scroll_y, hero_height, cfg);

        if let Some(hero) = &self.hero {
            let _ = set_style(hero, "transform", &format!("translateY(-{}px)", p.hero_shift));
        }
        if let Some(left) = &self.hero_left {
            let _ = set_style(left, "transform", &format!("translateY(-{}px)", p.left_shift));
        }
        if let Some(right) = &self.hero_right {
            let _ = set_style(right, "transform", &format!("translateY(-{}px)", p.right_shift));
        }
        if let Some(fade) = &self.hero_fade {
            let blur = format!("blur({}px)", p.fade_blur_px);
            let _ = set_style(fade, "opacity", &p.fade_opacity.to_string());
            let _ = set_style(fade, "backdrop-filter", &blur);
            let _ = set_style(fade, "-webkit-backdrop-filter", &blur);
        }

        for (i, cloud) in self.clouds.iter().enumerate() {
            let (x, y) = cloud_offset(i, scroll_y, cfg);
            let _ = set_style(cloud, "transform", &format!("translate({}px, {}px)", x, y));
        }

        for section in &self.sections {
            let rect = section.get_bounding_client_rect();
            let shift = section_shift(vh, rect.top(), rect.height(), cfg.section_max_shift);
            let _ = set_style(section, "transform", &format!("translateY({}px)", shift));
        }
    }
}

/// Scroll-driven parallax, recomputed at most once per animation frame.
pub struct ParallaxBinding {
    window: Window,
    _scroll: Listener,
    _frame: Rc<Closure<dyn FnMut()>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl ParallaxBinding {
    pub fn attach(window: &Window, document: &Document, cfg: ParallaxConfig) -> Result<Self, JsValue> {
        let targets = Rc::new(ParallaxTargets::collect(document));
        let cfg = Rc::new(cfg);
        let scheduler = Rc::new(RefCell::new(FrameScheduler::new(scroll_y(window))));
        let raf_id = Rc::new(Cell::new(None));

        let frame = {
            let targets = targets.clone();
            let cfg = cfg.clone();
            let scheduler = scheduler.clone();
            let raf_id = raf_id.clone();
            let window = window.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                raf_id.set(None);
                let y = scheduler.borrow_mut().take_frame();
                targets.apply(&window, y, &cfg);
            }) as Box<dyn FnMut()>))
        };

        let scroll = {
            let frame = frame.clone();
            let raf_id = raf_id.clone();
            let window_s = window.clone();
            Listener::with_passive(window, "scroll", true, move |_| {
                if !scheduler.borrow_mut().on_scroll(scroll_y(&window_s)) {
                    return;
                }
                match window_s.request_animation_frame((*frame).as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(_) => scheduler.borrow_mut().abandon(),
                }
            })?
        };

        targets.apply(window, scroll_y(window), &cfg);

        Ok(Self {
            window: window.clone(),
            _scroll: scroll,
            _frame: frame,
            raf_id,
        })
    }
}

impl Drop for ParallaxBinding {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
