use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::LightboxConfig;
use crate::page::listener::Listener;
use crate::state::{LightboxAction, LightboxState};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub state: UseReducerHandle<LightboxState>,
    pub config: LightboxConfig,
}

fn key_action(key: &str) -> Option<LightboxAction> {
    match key {
        "Escape" => Some(LightboxAction::Close),
        "ArrowRight" => Some(LightboxAction::Next),
        "ArrowLeft" => Some(LightboxAction::Prev),
        _ => None,
    }
}

/// What to do with `body`'s overflow when the lightbox flips open or shut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OverflowChange {
    Lock,
    Restore,
}

/// Only a real close restores the page; the initial closed render leaves it alone.
fn overflow_change(was_open: bool, open: bool) -> Option<OverflowChange> {
    match (was_open, open) {
        (_, true) => Some(OverflowChange::Lock),
        (true, false) => Some(OverflowChange::Restore),
        (false, false) => None,
    }
}

/// Full-screen image carousel over the project gallery.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = &props.state;
    let open = state.is_open();

    // Keyboard: Escape / arrows, document wide
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    Listener::new(&document, "keydown", move |e| {
                        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if let Some(action) = key_action(&e.key()) {
                            dispatcher.dispatch(action);
                        }
                    })
                    .map_err(|e| clog(&format!("lightbox keys: {:?}", e)))
                    .ok()
                });
            move || drop(listener)
        });
    }

    // Page scroll lock while open
    {
        let was_open = use_mut_ref(|| false);
        use_effect_with(open, move |open| {
            let change = overflow_change(*was_open.borrow(), *open);
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let (Some(change), Some(body)) = (change, body) {
                let style = body.style();
                let _ = match change {
                    OverflowChange::Lock => style.set_property("overflow", "hidden"),
                    OverflowChange::Restore => style.remove_property("overflow").map(drop),
                };
            }
            *was_open.borrow_mut() = *open;
            || ()
        });
    }

    // Deferred zoom-in after opening, deferred cleanup after closing.
    // Re-running the effect drops (cancels) whichever timeout is pending.
    {
        let zoom_pending = open && !state.zoomed;
        let clear_pending = !open && state.shown.is_some();
        let dispatcher = state.dispatcher();
        let zoom_ms = props.config.zoom_delay_ms;
        let clear_ms = props.config.clear_delay_ms;
        use_effect_with((zoom_pending, clear_pending), move |&(zoom, clear)| {
            let timeout = if zoom {
                Some(Timeout::new(zoom_ms, move || {
                    dispatcher.dispatch(LightboxAction::ZoomIn)
                }))
            } else if clear {
                Some(Timeout::new(clear_ms, move || {
                    dispatcher.dispatch(LightboxAction::ClearShown)
                }))
            } else {
                None
            };
            move || drop(timeout)
        });
    }

    {
        let current = state.current;
        let total = state.images.len();
        use_effect_with(current, move |current| {
            match current {
                Some(i) => clog(&format!("lightbox: showing {}/{}", i + 1, total)),
                None => clog("lightbox: closed"),
            }
            || ()
        });
    }

    let dispatch = |action: LightboxAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };
    let (src, alt) = state
        .shown
        .as_ref()
        .map(|img| (img.src.clone(), img.alt.clone()))
        .unwrap_or_default();

    html! {
        <div
            id="lightbox"
            class={classes!("lightbox", open.then_some("open"))}
            aria-hidden={(!open).to_string()}
        >
            <div id="lightbox-overlay" class="lightbox-overlay" onclick={dispatch(LightboxAction::Close)}></div>
            <div class="lightbox-content" role="dialog" aria-modal="true" aria-labelledby="lightbox-caption">
                <button id="lightbox-close" class="lightbox-close" aria-label="Close" onclick={dispatch(LightboxAction::Close)}>{"×"}</button>
                <button id="lightbox-prev" class="lightbox-nav lightbox-prev" aria-label="Previous image" onclick={dispatch(LightboxAction::Prev)}>{"‹"}</button>
                <figure class="lightbox-figure">
                    <img
                        id="lightbox-img"
                        class={classes!("lightbox-img", state.zoomed.then_some("visible"))}
                        src={src}
                        alt={alt}
                    />
                    <figcaption id="lightbox-caption">{ state.caption().to_string() }</figcaption>
                </figure>
                <button id="lightbox-next" class="lightbox-nav lightbox-next" aria-label="Next image" onclick={dispatch(LightboxAction::Next)}>{"›"}</button>
                <button id="lightbox-return" class="lightbox-return" onclick={dispatch(LightboxAction::Close)}>{"Back to projects"}</button>
            </div>
        </div>
    }
}
