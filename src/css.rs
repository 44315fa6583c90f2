//! Computed-style string parsing.
//!
//! Layout values come back from `getComputedStyle` (or the in-memory
//! stylesheet) as strings such as `"12px"` or `"25%"`.

use crate::error::{Result, ZoomError};

/// A length the grid scaling pass understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    /// Absolute pixels (`"300px"`, or a bare number).
    Px(f64),
    /// Percentage of the containing block (`"25%"`).
    Percent(f64),
}

impl CssLength {
    /// Parse a computed length.
    ///
    /// Only `px` and `%` are accepted. Anything else (`auto`, `10vw`,
    /// `calc(...)`, `2em`) is reported as [`ZoomError::UnsupportedLength`]
    /// rather than guessed at.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let unsupported = || ZoomError::UnsupportedLength(trimmed.to_string());

        if let Some(number) = trimmed.strip_suffix('%') {
            return parse_number(number).map(Self::Percent).ok_or_else(unsupported);
        }
        if let Some(number) = trimmed.strip_suffix("px") {
            return parse_number(number).map(Self::Px).ok_or_else(unsupported);
        }
        parse_number(trimmed).map(Self::Px).ok_or_else(unsupported)
    }

    /// The numeric part, regardless of unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Percent(v) => v,
        }
    }
}

/// Convert a computed-style size string to a number.
///
/// Strips a trailing `px` or `%`. Unparseable input (`auto`, `""`,
/// `normal`) yields `0.0` so padding and height reads stay best-effort.
pub fn parse_size(text: &str) -> f64 {
    let trimmed = text.trim();
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix('%'))
        .unwrap_or(trimmed);
    parse_number(number).unwrap_or(0.0)
}

/// Format a pixel value for an inline style (`1160px`, `390.5px`).
pub fn px(value: f64) -> String {
    format!("{value}px")
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
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

    #[test]
    fn test_parse_size_pixels() {
        assert_eq!(parse_size("10px"), 10.0);
        assert_eq!(parse_size(" 12.5px "), 12.5);
        assert_eq!(parse_size("0px"), 0.0);
    }

    #[test]
    fn test_parse_size_percent() {
        assert_eq!(parse_size("50%"), 50.0);
        assert_eq!(parse_size("33.3333%"), 33.3333);
    }

    #[test]
    fn test_parse_size_unparseable_is_zero() {
        for input in ["auto", "", "normal", "calc(100% - 2px)", "NaNpx", "infpx"] {
            assert_eq!(parse_size(input), 0.0, "input {input:?}");
        }
    }

    #[test]
    fn test_css_length_units() {
        assert_eq!(CssLength::parse("50%").unwrap(), CssLength::Percent(50.0));
        assert_eq!(CssLength::parse("300px").unwrap(), CssLength::Px(300.0));
        assert_eq!(CssLength::parse("0").unwrap(), CssLength::Px(0.0));
    }

    #[test]
    fn test_css_length_unsupported() {
        for input in ["auto", "10vw", "2em", "calc(25% - 10px)", ""] {
            match CssLength::parse(input) {
                Err(ZoomError::UnsupportedLength(text)) => assert_eq!(text, input.trim()),
                other => panic!("expected unsupported length for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(1160.0), "1160px");
        assert_eq!(px(390.5), "390.5px");
    }
}
