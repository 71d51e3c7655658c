use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};
use yew::functional::UseReducerDispatcher;

use super::listener::Listener;
use crate::config::LightboxConfig;
use crate::state::{GalleryImage, LightboxAction, LightboxState};
use crate::util::{query_all, set_style};

fn describe(el: &HtmlElement) -> GalleryImage {
    match el.dyn_ref::<HtmlImageElement>() {
        // resolved URL, as the browser would load it
        Some(img) => GalleryImage {
            src: img.src(),
            alt: img.alt(),
        },
        None => GalleryImage {
            src: el.get_attribute("src").unwrap_or_default(),
            alt: el.get_attribute("alt").unwrap_or_default(),
        },
    }
}

/// Collects the project images into the lightbox and opens it on click.
pub fn bind(
    document: &Document,
    cfg: &LightboxConfig,
    lightbox: UseReducerDispatcher<LightboxState>,
) -> Result<Vec<Listener>, JsValue> {
    let images = query_all(document, &cfg.image_selector);
    lightbox.dispatch(LightboxAction::SetGallery(images.iter().map(describe).collect()));

    let mut listeners = Vec::with_capacity(images.len());
    for (idx, img) in images.iter().enumerate() {
        set_style(img, "cursor", "zoom-in")?;
        let lightbox = lightbox.clone();
        listeners.push(Listener::new(img, "click", move |_| {
            lightbox.dispatch(LightboxAction::Open(idx));
        })?);
    }
    Ok(listeners)
}
