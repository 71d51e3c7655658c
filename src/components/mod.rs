pub mod app;
pub mod lightbox;
pub mod scroll_indicators;
pub mod welcome_modal;

pub use app::{App, AppProps};
