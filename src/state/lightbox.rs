use std::rc::Rc;
use yew::Reducible;

/// One gallery image as gathered from the page at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    /// Accessible label; doubles as the caption.
    pub alt: String,
}

/// Lightbox carousel state.
///
/// `current` is the open index (`None` = closed). `shown` is what the overlay
/// displays and outlives `current` until the close transition has played.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxState {
    pub images: Vec<GalleryImage>,
    pub current: Option<usize>,
    pub shown: Option<GalleryImage>,
    pub zoomed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LightboxAction {
    SetGallery(Vec<GalleryImage>),
    Open(usize),
    Next,
    Prev,
    Close,
    /// Deferred zoom-in once the overlay is visible.
    ZoomIn,
    /// Deferred cleanup once the close transition is over.
    ClearShown,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn caption(&self) -> &str {
        self.shown.as_ref().map(|img| img.alt.as_str()).unwrap_or("")
    }

    fn next_index(&self) -> Option<usize> {
        let n = self.images.len();
        self.current.filter(|_| n > 0).map(|i| (i + 1) % n)
    }

    fn prev_index(&self) -> Option<usize> {
        let n = self.images.len();
        self.current.filter(|_| n > 0).map(|i| (i + n - 1) % n)
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LightboxAction::*;
        let mut new = (*self).clone();
        match action {
            SetGallery(images) => {
                new.images = images;
                new.current = None;
                new.shown = None;
                new.zoomed = false;
            }
            Open(idx) => {
                let Some(img) = new.images.get(idx).cloned() else {
                    return self;
                };
                // stepping through an open carousel keeps the zoom
                if new.current.is_none() {
                    new.zoomed = false;
                }
                new.current = Some(idx);
                new.shown = Some(img);
            }
            Next => match self.next_index() {
                Some(idx) => return self.reduce(Open(idx)),
                None => return self,
            },
            Prev => match self.prev_index() {
                Some(idx) => return self.reduce(Open(idx)),
                None => return self,
            },
            Close => {
                if new.current.is_none() && !new.zoomed {
                    return self;
                }
                new.current = None;
                new.zoomed = false;
            }
            ZoomIn => {
                if new.current.is_none() || new.zoomed {
                    return self;
                }
                new.zoomed = true;
            }
            ClearShown => {
                if new.current.is_some() || new.shown.is_none() {
                    return self;
                }
                new.shown = None;
            }
        }
        new.into()
    }
}
