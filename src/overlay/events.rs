//! Keyboard handling for `ZoomOverlay`.

use log::trace;

use super::{ViewMode, ZoomOverlay};
use crate::dom::Dom;

impl<D: Dom> ZoomOverlay<D> {
    /// React to a key press.
    ///
    /// A zoom-out key in normal mode opens the grid; a zoom-in key in grid
    /// mode closes it. Returns the new mode when a transition happened, and
    /// `None` for every other key (the event is left alone).
    pub fn handle_key(&mut self, key_code: u32) -> Option<ViewMode> {
        match self.mode {
            ViewMode::Normal if self.config.keys.is_zoom_out(key_code) => {
                self.zoom_in();
                Some(ViewMode::Grid)
            }
            ViewMode::Grid if self.config.keys.is_zoom_in(key_code) => {
                self.zoom_out();
                Some(ViewMode::Normal)
            }
            _ => {
                trace!("key {key_code} ignored in {:?} mode", self.mode);
                None
            }
        }
    }
}
