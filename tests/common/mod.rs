//! Common test utilities for building presentations in an in-memory DOM.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use slidezoom::dom::{Dom, HostView, MemoryDom, NodeId};
use slidezoom::layout::Viewport;
use slidezoom::{ZoomConfig, ZoomOverlay};

/// Builder for a host presentation inside a `MemoryDom`.
///
/// ```rust,ignore
/// let (dom, host) = PresentationBuilder::new()
///     .viewport(1200.0, 800.0)
///     .cell_padding("10px", "10px", "5px", "5px")
///     .cell_width("50%")
///     .slides(3)
///     .build();
/// ```
pub struct PresentationBuilder {
    viewport: Viewport,
    rules: Vec<(String, String, String)>,
    slide_titles: Vec<String>,
    trailing_sibling: bool,
}

impl Default for PresentationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationBuilder {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(1200.0, 800.0),
            rules: Vec::new(),
            slide_titles: Vec::new(),
            trailing_sibling: false,
        }
    }

    pub fn viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Stylesheet rule `.class { property: value }`.
    pub fn rule(mut self, class: &str, property: &str, value: &str) -> Self {
        self.rules
            .push((class.to_string(), property.to_string(), value.to_string()));
        self
    }

    /// Padding of the default `column` grid cell.
    pub fn cell_padding(self, left: &str, right: &str, top: &str, bottom: &str) -> Self {
        self.rule("column", "padding-left", left)
            .rule("column", "padding-right", right)
            .rule("column", "padding-top", top)
            .rule("column", "padding-bottom", bottom)
    }

    /// Computed width of the default `column` grid cell.
    pub fn cell_width(self, width: &str) -> Self {
        self.rule("column", "width", width)
    }

    /// Add `count` slides titled "Slide 1".."Slide N".
    pub fn slides(mut self, count: usize) -> Self {
        let start = self.slide_titles.len();
        self.slide_titles
            .extend((start..start + count).map(|i| format!("Slide {}", i + 1)));
        self
    }

    /// Put another element after the host root, so "immediately after" is
    /// observable.
    pub fn with_trailing_sibling(mut self) -> Self {
        self.trailing_sibling = true;
        self
    }

    pub fn build(self) -> (MemoryDom, HostView<NodeId>) {
        let mut dom = MemoryDom::new(self.viewport);
        for (class, property, value) in &self.rules {
            dom.add_rule(class, property, value);
        }

        let body = dom.body();
        let root = dom.create_element("article");
        dom.set_id(&root, "webslides");
        dom.set_class_name(&root, "vertical");
        dom.set_attribute(root, "data-theme", "dark").unwrap();
        dom.append_child(&body, &root).unwrap();

        if self.trailing_sibling {
            let footer = dom.create_element("footer");
            dom.append_child(&body, &footer).unwrap();
        }

        let slides = self
            .slide_titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let slide = dom.create_element("section");
                dom.set_id(&slide, &format!("section-{}", i + 1));
                dom.set_class_name(&slide, "slide");
                let heading = dom.create_element("h2");
                dom.set_text(heading, title).unwrap();
                dom.append_child(&slide, &heading).unwrap();
                dom.append_child(&root, &slide).unwrap();
                slide
            })
            .collect();

        (dom, HostView::new(root, slides))
    }

    /// Build the presentation and the overlay with the default config.
    pub fn build_overlay(self) -> ZoomOverlay<MemoryDom> {
        let (dom, host) = self.build();
        ZoomOverlay::build(dom, host, ZoomConfig::default()).unwrap()
    }
}

/// Heading text inside a (cloned) slide.
pub fn slide_title(dom: &MemoryDom, slide: NodeId) -> String {
    dom.children(slide)
        .first()
        .map(|&h| dom.text(h).to_string())
        .unwrap_or_default()
}

/// Exactly one of host root and overlay root is visible.
pub fn assert_exclusive_views(overlay: &ZoomOverlay<MemoryDom>) {
    let dom = overlay.dom();
    let host_visible = dom.is_visible(&overlay.host().root);
    let grid_visible = dom.is_visible(overlay.root());
    assert!(
        host_visible != grid_visible,
        "host visible: {host_visible}, grid visible: {grid_visible}"
    );
    assert_eq!(grid_visible, overlay.is_zoomed());
}
