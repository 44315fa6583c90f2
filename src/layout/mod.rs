//! Grid layout math for the zoom overlay.
//!
//! This module handles:
//! - Viewport dimensions (`window.innerWidth` / `innerHeight`)
//! - Reading a grid cell's margins and width into a scale factor
//! - Sizing each cloned slide so it fills the viewport once scaled down
//! - Compensating the wrapper height for the flexbox grid

mod grid_cell;
mod viewport;

pub use grid_cell::{GridCellStyle, GridLayout, Padding, ScaleFactor, SlideSize};
pub use viewport::Viewport;
