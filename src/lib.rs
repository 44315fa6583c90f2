//! slidezoom - slide grid overview for the web
//!
//! Clones a slide presentation into a hidden grid and swaps it in and out
//! from the keyboard, via WebAssembly:
//! - One-time build: every slide deep-cloned into a grid cell
//! - Slides sized to the viewport and scaled down by the grid stylesheet
//! - `-` opens the grid, `+` closes it
//! - Same core runs natively against an in-memory DOM
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { Zoom } from 'slidezoom';
//! await init();
//! const zoom = new Zoom(document.getElementById('webslides'), slides, { gridClass: 'grid' });
//! zoom.zoomIn();
//! ```

pub mod config;
pub mod css;
pub mod dom;
pub mod error;
pub mod keys;
pub mod layout;
pub mod logging;
pub mod overlay;

#[cfg(target_arch = "wasm32")]
pub mod plugin;

use wasm_bindgen::prelude::*;

pub use config::ZoomConfig;
pub use error::{Result, ZoomError};
pub use overlay::{OverlaySlide, ViewMode, ZoomOverlay};
#[cfg(target_arch = "wasm32")]
pub use plugin::Zoom;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
