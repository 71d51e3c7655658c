/// Coalesces scroll events so at most one parallax frame is pending.
#[derive(Default, Debug, Clone)]
pub struct FrameScheduler {
    last_scroll: f64,
    ticking: bool,
}

impl FrameScheduler {
    pub fn new(initial_scroll: f64) -> Self {
        Self {
            last_scroll: initial_scroll,
            ticking: false,
        }
    }

    /// Records the offset; `true` means the caller must request a frame.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.last_scroll = scroll_y;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called from the frame callback: frees the slot and hands back the
    /// newest offset.
    pub fn take_frame(&mut self) -> f64 {
        self.ticking = false;
        self.last_scroll
    }

    /// Frees the slot without running a frame (e.g. the request failed).
    pub fn abandon(&mut self) {
        self.ticking = false;
    }
}
