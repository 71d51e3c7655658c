use crate::model::divider_height;

/// Hero divider drag gesture, shared by mouse and touch input.
#[derive(Default, Debug, Clone)]
pub struct DividerDrag {
    pub active: bool,
}

impl DividerDrag {
    pub fn press(&mut self) {
        self.active = true;
    }

    /// Ends the gesture; returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// New hero height for a pointer at `client_y`, if a drag is running and
    /// the viewport leaves room for one.
    pub fn track(&self, client_y: f64, viewport_height: f64, margin: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        divider_height(client_y, viewport_height, margin)
    }
}
