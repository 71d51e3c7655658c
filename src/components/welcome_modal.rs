use gloo_storage::errors::StorageError;
use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::WelcomeConfig;
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeModalProps {
    pub config: WelcomeConfig,
}

/// Whether a session-flag lookup means the visitor has not been greeted yet.
/// Anything stored under the key counts as "greeted", parseable or not.
fn not_yet_greeted<T>(lookup: &Result<T, StorageError>) -> bool {
    matches!(lookup, Err(StorageError::KeyNotFound(_)))
}

fn session_storage_available() -> bool {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .is_some()
}

/// Where the "already greeted" flag lives.
trait SessionFlags {
    fn lookup(&self, key: &str) -> Result<serde_json::Value, StorageError>;
    fn record(&self, key: &str) -> Result<(), StorageError>;
}

/// The tab's `sessionStorage`.
struct TabSession;

impl SessionFlags for TabSession {
    fn lookup(&self, key: &str) -> Result<serde_json::Value, StorageError> {
        SessionStorage::get(key)
    }

    fn record(&self, key: &str) -> Result<(), StorageError> {
        SessionStorage::set(key, true)
    }
}

/// Greets on the first call per session and records it, so later calls
/// against the same flags say no.
fn greet_once(flags: &impl SessionFlags, key: &str) -> bool {
    if !not_yet_greeted(&flags.lookup(key)) {
        return false;
    }
    if let Err(e) = flags.record(key) {
        clog(&format!("welcome: could not record {}: {}", key, e));
    }
    true
}

/// Decides once per page load whether to greet. Without `sessionStorage`
/// every load greets.
fn greet_this_session(key: &str) -> bool {
    if !session_storage_available() {
        return true;
    }
    greet_once(&TabSession, key)
}

#[function_component(WelcomeModal)]
pub fn welcome_modal(props: &WelcomeModalProps) -> Html {
    let show = {
        let key = props.config.session_key.clone();
        use_state(move || greet_this_session(&key))
    };
    let modal_ref = use_node_ref();

    let close = {
        let show = show.clone();
        Callback::from(move |_: MouseEvent| show.set(false))
    };
    // only clicks on the backdrop itself, not bubbled ones from the card
    let backdrop = {
        let show = show.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(target), Some(modal)) = (e.target(), modal_ref.get()) else {
                return;
            };
            if JsValue::from(target) == JsValue::from(modal) {
                show.set(false);
            }
        })
    };

    let cfg = &props.config;
    html! {
        <div
            id="welcome-modal"
            ref={modal_ref}
            class={classes!("welcome-modal", (*show).then_some("show"))}
            onclick={backdrop}
            role="dialog"
            aria-modal="true"
            aria-labelledby="welcome-title"
        >
            <div class="welcome-card">
                <h2 id="welcome-title">{ cfg.title.clone() }</h2>
                <p>{ cfg.message.clone() }</p>
                <button id="welcome-close" class="welcome-close" onclick={close}>{ cfg.dismiss_label.clone() }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Raw JSON strings by key, like the browser keeps them.
    #[derive(Default)]
    struct MemorySession {
        values: RefCell<HashMap<String, String>>,
    }

    impl SessionFlags for MemorySession {
        fn lookup(&self, key: &str) -> Result<serde_json::Value, StorageError> {
            let values = self.values.borrow();
            let raw = values
                .get(key)
                .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))?;
            serde_json::from_str(raw).map_err(StorageError::SerdeError)
        }

        fn record(&self, key: &str) -> Result<(), StorageError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), "true".to_string());
            Ok(())
        }
    }

    #[test]
    fn greets_only_once_per_session() {
        let session = MemorySession::default();
        assert!(greet_once(&session, "welcomeShown"));
        assert!(!greet_once(&session, "welcomeShown"));
        assert!(!greet_once(&session, "welcomeShown"));
        assert_eq!(
            session.values.borrow().get("welcomeShown").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn separate_keys_greet_separately() {
        let session = MemorySession::default();
        assert!(greet_once(&session, "welcomeShown"));
        assert!(greet_once(&session, "otherPage"));
    }

    #[test]
    fn garbage_in_storage_suppresses_greeting() {
        let session = MemorySession::default();
        session
            .values
            .borrow_mut()
            .insert("welcomeShown".to_string(), "yes".to_string());
        assert!(!greet_once(&session, "welcomeShown"));
    }

    #[test]
    fn missing_key_means_first_visit() {
        let lookup: Result<bool, StorageError> = Err(StorageError::KeyNotFound("welcomeShown".into()));
        assert!(not_yet_greeted(&lookup));
    }

    #[test]
    fn stored_flag_means_already_greeted() {
        let lookup: Result<bool, StorageError> = Ok(true);
        assert!(!not_yet_greeted(&lookup));
    }

    #[test]
    fn unparseable_value_still_counts_as_greeted() {
        let err = serde_json::from_str::<bool>("yes").unwrap_err();
        let lookup: Result<bool, StorageError> = Err(StorageError::SerdeError(err));
        assert!(!not_yet_greeted(&lookup));
    }
}
