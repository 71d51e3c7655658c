pub mod drag;
pub mod frame;
pub mod lightbox;
pub mod reveal;

pub use drag::DividerDrag;
pub use frame::FrameScheduler;
pub use lightbox::{GalleryImage, LightboxAction, LightboxState};
pub use reveal::RevealTracker;
