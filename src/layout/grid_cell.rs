//! Per-slide scaling inside a grid cell.
//!
//! The grid shrinks each cell to a fraction of the viewport width. For a
//! slide to look like a miniature of the live view, it is rendered at
//! viewport size (minus the cell margin, pre-multiplied by the scale) and
//! the grid's CSS transform brings it back down. The wrapper around the
//! slide does not shrink with the transform inside a flex container, so its
//! height is set explicitly to the scaled height.

use serde::{Deserialize, Serialize};

use super::Viewport;
use crate::css::{parse_size, CssLength};
use crate::error::{Result, ZoomError};

/// Computed padding of a grid cell, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    /// Build from computed-style strings. Unparseable values count as zero.
    pub fn from_computed(left: &str, right: &str, top: &str, bottom: &str) -> Self {
        Self {
            left: parse_size(left),
            right: parse_size(right),
            top: parse_size(top),
            bottom: parse_size(bottom),
        }
    }

    /// `padding-left + padding-right`
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `padding-top + padding-bottom`
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// What the measure pass reads from a grid cell's computed style.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCellStyle {
    pub padding: Padding,
    /// Raw computed `width` (`"25%"` while the overlay is hidden, or pixels).
    pub width: String,
}

/// Ratio between a slide's natural width and its grid cell width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Derive the scale from a cell width.
    ///
    /// `P%` gives `100 / P`; `W px` gives `viewport_width / W`. Zero,
    /// negative and non-finite results are rejected.
    pub fn from_cell_width(width: CssLength, viewport_width: f64) -> Result<Self> {
        let value = width.value();
        if value <= 0.0 {
            return Err(ZoomError::DegenerateWidth(format!("{width:?}")));
        }
        let scale = match width {
            CssLength::Percent(percent) => 100.0 / percent,
            CssLength::Px(pixels) => viewport_width / pixels,
        };
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ZoomError::DegenerateWidth(format!(
                "{width:?} in a {viewport_width}px viewport"
            )));
        }
        Ok(Self(scale))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Inline size assigned to a cloned slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

/// Result of the measure pass for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub scale: ScaleFactor,
    pub margin_width: f64,
    pub margin_height: f64,
    pub slide: SlideSize,
}

impl GridLayout {
    /// Size a slide for a grid cell in the given viewport.
    ///
    /// Slide width is `viewport.width - margin_width * scale` and height is
    /// `viewport.height - margin_height * scale`. Either may come out negative
    /// when the scaled margin exceeds the viewport; see [`Self::fits_viewport`].
    pub fn compute(viewport: Viewport, cell: &GridCellStyle) -> Result<Self> {
        let width = CssLength::parse(&cell.width)?;
        let scale = ScaleFactor::from_cell_width(width, viewport.width)?;
        let margin_width = cell.padding.horizontal();
        let margin_height = cell.padding.vertical();

        let slide = SlideSize {
            width: viewport.width - margin_width * scale.value(),
            height: viewport.height - margin_height * scale.value(),
        };

        Ok(Self {
            scale,
            margin_width,
            margin_height,
            slide,
        })
    }

    /// Whether both slide dimensions are valid CSS lengths. A browser drops
    /// a negative inline length and keeps the stylesheet size.
    pub fn fits_viewport(&self) -> bool {
        self.slide.width >= 0.0 && self.slide.height >= 0.0
    }

    /// Wrapper height for a slide whose rendered height (read back after
    /// resizing) is `rendered_height`.
    pub fn wrap_height(&self, rendered_height: f64) -> f64 {
        rendered_height / self.scale.value()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn cell(padding: [&str; 4], width: &str) -> GridCellStyle {
        let [left, right, top, bottom] = padding;
        GridCellStyle {
            padding: Padding::from_computed(left, right, top, bottom),
            width: width.to_string(),
        }
    }

    #[test]
    fn test_percentage_width() {
        let layout = GridLayout::compute(
            Viewport::new(1200.0, 800.0),
            &cell(["10px", "10px", "5px", "5px"], "50%"),
        )
        .unwrap();

        assert_eq!(layout.scale.value(), 2.0);
        assert_eq!(layout.margin_width, 20.0);
        assert_eq!(layout.margin_height, 10.0);
        assert_eq!(layout.slide.width, 1160.0);
        assert_eq!(layout.slide.height, 780.0);
        assert_eq!(layout.wrap_height(780.0), 390.0);
    }

    #[test]
    fn test_pixel_width() {
        let layout = GridLayout::compute(
            Viewport::new(1200.0, 900.0),
            &cell(["10px", "10px", "8px", "7px"], "300px"),
        )
        .unwrap();

        assert_eq!(layout.scale.value(), 4.0);
        assert_eq!(layout.slide.width, 1200.0 - 20.0 * 4.0);
        assert_eq!(layout.slide.height, 900.0 - 15.0 * 4.0);
        assert_eq!(layout.wrap_height(840.0), 210.0);
    }

    #[test]
    fn test_unparseable_padding_counts_as_zero() {
        let layout = GridLayout::compute(
            Viewport::new(1000.0, 500.0),
            &cell(["auto", "", "normal", "4px"], "25%"),
        )
        .unwrap();

        assert_eq!(layout.margin_width, 0.0);
        assert_eq!(layout.margin_height, 4.0);
        assert_eq!(layout.slide.width, 1000.0);
        assert_eq!(layout.slide.height, 500.0 - 16.0);
    }

    #[test]
    fn test_oversized_margin_keeps_raw_negative_size() {
        let layout = GridLayout::compute(
            Viewport::new(100.0, 100.0),
            &cell(["40px", "40px", "40px", "40px"], "10%"),
        )
        .unwrap();
        assert_eq!(layout.slide.width, 100.0 - 80.0 * 10.0);
        assert_eq!(layout.slide.height, 100.0 - 80.0 * 10.0);
        assert!(!layout.fits_viewport());
    }

    #[test]
    fn test_exact_fit_is_valid() {
        let layout = GridLayout::compute(
            Viewport::new(100.0, 100.0),
            &cell(["5px", "5px", "5px", "5px"], "10%"),
        )
        .unwrap();
        assert_eq!(layout.slide.width, 0.0);
        assert!(layout.fits_viewport());
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        for width in ["0%", "0px", "-20%"] {
            match GridLayout::compute(Viewport::default(), &cell(["0px"; 4], width)) {
                Err(ZoomError::DegenerateWidth(_)) => {}
                other => panic!("expected degenerate width for {width}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_viewport_with_pixel_width_is_degenerate() {
        let result = GridLayout::compute(Viewport::new(0.0, 0.0), &cell(["0px"; 4], "200px"));
        assert!(matches!(result, Err(ZoomError::DegenerateWidth(_))));
    }

    #[test]
    fn test_serializes_camel_case() {
        let layout = GridLayout::compute(
            Viewport::new(1200.0, 800.0),
            &cell(["10px", "10px", "5px", "5px"], "50%"),
        )
        .unwrap();
        let json = serde_json::to_value(layout).unwrap();
        assert_eq!(json["scale"], 2.0);
        assert_eq!(json["marginWidth"], 20.0);
        assert_eq!(json["slide"]["width"], 1160.0);
    }
}
