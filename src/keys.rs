//! Key codes that drive the zoom toggle.
//!
//! Codes are `KeyboardEvent.keyCode` values. Each trigger lists the numpad
//! key plus the main-row codes reported by Firefox and by other browsers.

use serde::{Deserialize, Serialize};

/// `-` / `_` keys: request the grid overview.
pub const MINUS: [u32; 3] = [109, 173, 189];
/// `+` / `=` keys: return to the normal view.
pub const PLUS: [u32; 3] = [107, 171, 187];

/// The two disjoint trigger sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyBindings {
    /// Keys that zoom out to the grid (only honoured in normal mode).
    pub zoom_out: Vec<u32>,
    /// Keys that zoom back in to the live view (only honoured in grid mode).
    pub zoom_in: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            zoom_out: MINUS.to_vec(),
            zoom_in: PLUS.to_vec(),
        }
    }
}

impl KeyBindings {
    pub fn is_zoom_out(&self, key_code: u32) -> bool {
        self.zoom_out.contains(&key_code)
    }

    pub fn is_zoom_in(&self, key_code: u32) -> bool {
        self.zoom_in.contains(&key_code)
    }

    /// First key code present in both sets, if any.
    pub fn overlap(&self) -> Option<u32> {
        self.zoom_out
            .iter()
            .copied()
            .find(|code| self.zoom_in.contains(code))
    }
}
