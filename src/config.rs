//! Plugin configuration.
//!
//! Every field has a default matching the stock slide stylesheet, so an
//! empty object (or `undefined` from JavaScript) is a valid configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomError};
use crate::keys::KeyBindings;

/// Element id given to the overlay root.
pub const DEFAULT_OVERLAY_ID: &str = "webslides-zoomed";
/// Class that lays the overlay out as a grid.
pub const DEFAULT_GRID_CLASS: &str = "grid";
/// Class of the outer per-slide cell; its padding is the grid margin.
pub const DEFAULT_CELL_CLASS: &str = "column";
/// Class of the inner wrapper whose height is compensated for scaling.
pub const DEFAULT_WRAP_CLASS: &str = "wrap-zoom";
/// Tag used for both wrapper levels.
pub const DEFAULT_WRAPPER_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    pub overlay_id: String,
    pub grid_class: String,
    pub cell_class: String,
    pub wrap_class: String,
    pub wrapper_tag: String,
    pub keys: KeyBindings,
    /// Console log level on wasm32.
    pub log_level: LevelFilter,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            grid_class: DEFAULT_GRID_CLASS.to_string(),
            cell_class: DEFAULT_CELL_CLASS.to_string(),
            wrap_class: DEFAULT_WRAP_CLASS.to_string(),
            wrapper_tag: DEFAULT_WRAPPER_TAG.to_string(),
            keys: KeyBindings::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl ZoomConfig {
    /// Reject configurations the overlay cannot be built from.
    ///
    /// Runs before any DOM mutation.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("overlayId", &self.overlay_id),
            ("gridClass", &self.grid_class),
            ("cellClass", &self.cell_class),
            ("wrapClass", &self.wrap_class),
            ("wrapperTag", &self.wrapper_tag),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ZoomError::Config(format!("{field} must not be empty")));
            }
        }

        if self.keys.zoom_out.is_empty() || self.keys.zoom_in.is_empty() {
            return Err(ZoomError::Config(
                "both key trigger sets need at least one key code".to_string(),
            ));
        }
        if let Some(code) = self.keys.overlap() {
            return Err(ZoomError::Config(format!(
                "key code {code} is bound to both zoom in and zoom out"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        ZoomConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ZoomConfig =
            serde_json::from_str(r#"{"gridClass": "overview", "keys": {"zoomIn": [13]}}"#)
                .unwrap();
        assert_eq!(config.grid_class, "overview");
        assert_eq!(config.overlay_id, DEFAULT_OVERLAY_ID);
        assert_eq!(config.keys.zoom_in, vec![13]);
        assert_eq!(config.keys.zoom_out, crate::keys::MINUS.to_vec());
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_log_level_from_json() {
        let config: ZoomConfig = serde_json::from_str(r#"{"logLevel": "DEBUG"}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_empty_class_rejected() {
        let config = ZoomConfig {
            cell_class: "  ".to_string(),
            ..ZoomConfig::default()
        };
        match config.validate() {
            Err(ZoomError::Config(msg)) => assert!(msg.contains("cellClass")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_overlapping_keys_rejected() {
        let mut config = ZoomConfig::default();
        config.keys.zoom_in.push(109);
        match config.validate() {
            Err(ZoomError::Config(msg)) => assert!(msg.contains("109")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_set_rejected() {
        let mut config = ZoomConfig::default();
        config.keys.zoom_out.clear();
        assert!(config.validate().is_err());
    }
}
