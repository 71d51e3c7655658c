use std::rc::Rc;
use yew::prelude::*;

use super::{lightbox::Lightbox, scroll_indicators::ScrollIndicators, welcome_modal::WelcomeModal};
use crate::config::PortfolioConfig;
use crate::page::PageBindings;
use crate::state::LightboxState;
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<PortfolioConfig>,
}

/// Overlay root: renders the modal, scroll indicators and lightbox, and keeps
/// the static-page bindings alive for as long as it is mounted.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let lightbox = use_reducer(LightboxState::default);

    // Mount effect: wire the static page once
    {
        let config = props.config.clone();
        let dispatcher = lightbox.dispatcher();
        use_effect_with((), move |_| {
            let bindings = match PageBindings::attach(config, dispatcher) {
                Ok(bindings) => Some(bindings),
                Err(e) => {
                    clog(&format!("page bindings failed: {:?}", e));
                    None
                }
            };
            move || drop(bindings)
        });
    }

    let config = &props.config;
    html! {
        <>
            <ScrollIndicators config={config.scroll.clone()} />
            <WelcomeModal config={config.welcome.clone()} />
            <Lightbox state={lightbox.clone()} config={config.lightbox.clone()} />
        </>
    }
}
