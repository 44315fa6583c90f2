//! The zoom overlay: a hidden grid of cloned slides swapped in for the live
//! presentation.
//!
//! Construction clones the host root (without children) and every slide,
//! attaches the clones right after the host root, wraps each clone in a
//! wrap/cell pair and runs the measure pass. After that the overlay only
//! changes visibility.

mod events;

use log::{debug, warn};

use crate::config::ZoomConfig;
use crate::css::{parse_size, px};
use crate::dom::{Dom, HostView};
use crate::error::Result;
use crate::layout::{GridCellStyle, GridLayout, Padding, Viewport};

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Live presentation visible, grid hidden.
    #[default]
    Normal,
    /// Grid visible, live presentation hidden.
    Grid,
}

/// One cloned slide in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySlide<N> {
    /// Deep clone of the host slide.
    pub element: N,
    /// Inner wrapper whose height compensates for the grid scale.
    pub wrap: N,
    /// Outer grid cell; its padding is the grid margin.
    pub cell: N,
    /// Position in the presentation.
    pub index: usize,
    /// Measure pass result, `None` when the cell width was unsupported.
    pub layout: Option<GridLayout>,
}

/// Grid overview of a presentation.
pub struct ZoomOverlay<D: Dom> {
    dom: D,
    config: ZoomConfig,
    host: HostView<D::Node>,
    root: D::Node,
    slides: Vec<OverlaySlide<D::Node>>,
    mode: ViewMode,
}

impl<D: Dom> ZoomOverlay<D> {
    /// Build the overlay for `host`.
    ///
    /// The overlay starts hidden and the mode starts as [`ViewMode::Normal`].
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the document
    /// rejects a clone/insert/wrap/style. On a document error after the
    /// overlay was attached, the overlay is removed again before returning.
    /// A grid cell width that cannot be scaled is not an error: that slide is
    /// left at its natural size.
    pub fn build(mut dom: D, host: HostView<D::Node>, config: ZoomConfig) -> Result<Self> {
        config.validate()?;

        let root = dom.clone_node(&host.root, false)?;
        dom.set_id(&root, &config.overlay_id);
        dom.set_class_name(&root, &config.grid_class);

        let mut clones = Vec::with_capacity(host.slides.len());
        for slide in &host.slides {
            let clone = dom.clone_node(slide, true)?;
            dom.append_child(&root, &clone)?;
            clones.push(clone);
        }

        dom.hide(&root);
        dom.insert_after(&root, &host.root)?;

        let viewport = dom.viewport();
        let slides = match wrap_and_measure(&mut dom, &config, viewport, clones) {
            Ok(slides) => slides,
            Err(e) => {
                dom.remove(&root);
                return Err(e);
            }
        };

        debug!(
            "zoom overlay '{}' built with {} slides for a {}x{} viewport",
            config.overlay_id,
            slides.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            dom,
            config,
            host,
            root,
            slides,
            mode: ViewMode::Normal,
        })
    }

    /// Show the grid and hide the live presentation.
    pub fn zoom_in(&mut self) {
        self.dom.hide(&self.host.root);
        self.dom.show(&self.root);
        self.mode = ViewMode::Grid;
        debug!("zoomed in to grid view");
    }

    /// Show the live presentation and hide the grid.
    pub fn zoom_out(&mut self) {
        self.dom.hide(&self.root);
        self.dom.show(&self.host.root);
        self.mode = ViewMode::Normal;
        debug!("zoomed out to normal view");
    }

    /// Switch to whichever view is not showing.
    pub fn toggle(&mut self) {
        match self.mode {
            ViewMode::Normal => self.zoom_in(),
            ViewMode::Grid => self.zoom_out(),
        }
    }

    /// Current view.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// `true` while the grid is showing.
    pub fn is_zoomed(&self) -> bool {
        self.mode == ViewMode::Grid
    }

    /// Overlay root element.
    pub fn root(&self) -> &D::Node {
        &self.root
    }

    /// Cloned slides in presentation order.
    pub fn slides(&self) -> &[OverlaySlide<D::Node>] {
        &self.slides
    }

    /// Host presentation the overlay was built from.
    pub fn host(&self) -> &HostView<D::Node> {
        &self.host
    }

    /// Configuration the overlay was built with.
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Document the overlay lives in.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable access to the document, for the host's own edits.
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }
}

/// Wrap every clone in its wrap/cell pair and size it. Runs with the
/// overlay attached and still hidden.
fn wrap_and_measure<D: Dom>(
    dom: &mut D,
    config: &ZoomConfig,
    viewport: Viewport,
    clones: Vec<D::Node>,
) -> Result<Vec<OverlaySlide<D::Node>>> {
    let mut slides = Vec::with_capacity(clones.len());
    for (index, element) in clones.into_iter().enumerate() {
        let wrap = dom.wrap(&element, &config.wrapper_tag)?;
        dom.set_class_name(&wrap, &config.wrap_class);
        let cell = dom.wrap(&wrap, &config.wrapper_tag)?;
        dom.set_class_name(&cell, &config.cell_class);

        let layout = measure_slide(dom, viewport, &element, &wrap, &cell)?;
        if layout.is_none() {
            warn!("slide {index}: leaving slide at its natural size");
        }
        slides.push(OverlaySlide {
            element,
            wrap,
            cell,
            index,
            layout,
        });
    }
    Ok(slides)
}

/// Size one slide for its grid cell. Must run with the overlay attached.
fn measure_slide<D: Dom>(
    dom: &mut D,
    viewport: Viewport,
    element: &D::Node,
    wrap: &D::Node,
    cell: &D::Node,
) -> Result<Option<GridLayout>> {
    let style = GridCellStyle {
        padding: Padding::from_computed(
            &dom.computed_style(cell, "padding-left"),
            &dom.computed_style(cell, "padding-right"),
            &dom.computed_style(cell, "padding-top"),
            &dom.computed_style(cell, "padding-bottom"),
        ),
        width: dom.computed_style(cell, "width"),
    };

    let layout = match GridLayout::compute(viewport, &style) {
        Ok(layout) => layout,
        Err(e) => {
            warn!("{e}");
            return Ok(None);
        }
    };
    if !layout.fits_viewport() {
        warn!(
            "scaled grid margin exceeds the viewport ({}x{}px slide)",
            layout.slide.width, layout.slide.height
        );
        return Ok(None);
    }

    dom.set_style(element, "width", &px(layout.slide.width))?;
    dom.set_style(element, "height", &px(layout.slide.height))?;

    let rendered_height = parse_size(&dom.computed_style(element, "height"));
    dom.set_style(wrap, "height", &px(layout.wrap_height(rendered_height)))?;

    Ok(Some(layout))
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
    use crate::dom::{MemoryDom, NodeId};

    fn host(dom: &mut MemoryDom, count: usize) -> HostView<NodeId> {
        let body = dom.body();
        let root = dom.create_element("div");
        dom.set_id(&root, "webslides");
        dom.append_child(&body, &root).unwrap();
        let slides = (0..count)
            .map(|_| {
                let slide = dom.create_element("section");
                dom.append_child(&root, &slide).unwrap();
                slide
            })
            .collect();
        HostView::new(root, slides)
    }

    #[test]
    fn test_starts_normal_and_hidden() {
        let mut dom = MemoryDom::default();
        let host = host(&mut dom, 2);
        let overlay = ZoomOverlay::build(dom, host, ZoomConfig::default()).unwrap();

        assert_eq!(overlay.mode(), ViewMode::Normal);
        assert!(!overlay.is_zoomed());
        assert!(!overlay.dom().is_visible(overlay.root()));
        assert!(overlay.dom().is_visible(&overlay.host().root));
    }

    #[test]
    fn test_toggle_alternates() {
        let mut dom = MemoryDom::default();
        let host = host(&mut dom, 1);
        let mut overlay = ZoomOverlay::build(dom, host, ZoomConfig::default()).unwrap();

        overlay.toggle();
        assert_eq!(overlay.mode(), ViewMode::Grid);
        overlay.toggle();
        assert_eq!(overlay.mode(), ViewMode::Normal);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut dom = MemoryDom::default();
        let host = host(&mut dom, 1);
        let config = ZoomConfig {
            overlay_id: String::new(),
            ..ZoomConfig::default()
        };
        assert!(matches!(
            ZoomOverlay::build(dom, host, config),
            Err(crate::error::ZoomError::Config(_))
        ));
    }

    #[test]
    fn test_detached_host_root_is_dom_error() {
        let mut dom = MemoryDom::default();
        let root = dom.create_element("div");
        let result = ZoomOverlay::build(dom, HostView::new(root, Vec::new()), ZoomConfig::default());
        assert!(matches!(result, Err(crate::error::ZoomError::Dom(_))));
    }
}
