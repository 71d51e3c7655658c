use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::model::{back_to_top_visible, scroll_progress_percent};
use crate::page::listener::Listener;
use crate::util::{clog, scroll_y, viewport_height};

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollIndicatorsProps {
    pub config: ScrollConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrollReadout {
    progress: f64,
    show_back_to_top: bool,
}

fn read_scroll(window: &Window, threshold: f64) -> ScrollReadout {
    let top = scroll_y(window);
    let full_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollReadout {
        progress: scroll_progress_percent(top, full_height, viewport_height(window)),
        show_back_to_top: back_to_top_visible(top, threshold),
    }
}

/// Top-of-page progress bar plus the floating back-to-top button.
#[function_component(ScrollIndicators)]
pub fn scroll_indicators(props: &ScrollIndicatorsProps) -> Html {
    let readout = use_state_eq(ScrollReadout::default);

    {
        let readout = readout.clone();
        use_effect_with(props.config.back_to_top_after, move |threshold| {
            let threshold = *threshold;
            let listener = web_sys::window().and_then(|window| {
                readout.set(read_scroll(&window, threshold));
                let window_s = window.clone();
                let readout = readout.clone();
                Listener::new(&window, "scroll", move |_| {
                    readout.set(read_scroll(&window_s, threshold));
                })
                .map_err(|e| clog(&format!("scroll indicators: {:?}", e)))
                .ok()
            });
            move || drop(listener)
        });
    }

    let to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <div id="scroll-progress" class="scroll-progress" style={format!("width: {}%", readout.progress)}></div>
            <button
                id="back-to-top"
                class={classes!("back-to-top", readout.show_back_to_top.then_some("show"))}
                onclick={to_top}
                aria-label="Back to top"
            >
                {"↑"}
            </button>
        </>
    }
}
