//! Overlay construction and view-switching tests
//!
//! Tests for the cloned grid structure, slide order, visibility exclusion,
//! keyboard gating and the end-to-end zoom flow.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{assert_exclusive_views, slide_title, PresentationBuilder};
use slidezoom::dom::{Dom, MemoryDom, NodeId};
use slidezoom::layout::Viewport;
use slidezoom::keys::{MINUS, PLUS};
use slidezoom::{ViewMode, ZoomConfig, ZoomError, ZoomOverlay};

const MINUS_KEY: u32 = 109;
const PLUS_KEY: u32 = 107;

fn styled() -> PresentationBuilder {
    PresentationBuilder::new()
        .cell_padding("10px", "10px", "5px", "5px")
        .cell_width("25%")
}

#[test]
fn test_end_to_end_three_slides() {
    let mut overlay = styled().slides(3).with_trailing_sibling().build_overlay();

    {
        let dom = overlay.dom();
        let root = *overlay.root();
        let host_root = overlay.host().root;

        // Attached right after the host root, before the footer
        assert_eq!(dom.parent(root), Some(dom.body()));
        assert_eq!(dom.next_sibling(host_root), Some(root));
        assert_eq!(dom.tag(dom.next_sibling(root).unwrap()), "footer");
        assert!(!dom.is_visible(&root));

        let cells = dom.children(root);
        assert_eq!(cells.len(), 3);
        for (i, &cell) in cells.iter().enumerate() {
            assert!(dom.has_class(cell, "column"));
            let wrap = dom.children(cell)[0];
            assert!(dom.has_class(wrap, "wrap-zoom"));
            let clone = dom.children(wrap)[0];
            assert_eq!(slide_title(dom, clone), format!("Slide {}", i + 1));
        }
    }
    assert_eq!(overlay.mode(), ViewMode::Normal);

    overlay.handle_key(MINUS_KEY);
    assert_eq!(overlay.mode(), ViewMode::Grid);
    assert!(!overlay.dom().is_visible(&overlay.host().root));
    assert!(overlay.dom().is_visible(overlay.root()));

    overlay.handle_key(PLUS_KEY);
    assert_eq!(overlay.mode(), ViewMode::Normal);
    assert!(overlay.dom().is_visible(&overlay.host().root));
    assert!(!overlay.dom().is_visible(overlay.root()));
}

#[test]
fn test_overlay_root_is_shallow_clone_of_host_root() {
    let overlay = styled().slides(2).build_overlay();
    let dom = overlay.dom();
    let root = *overlay.root();

    assert_eq!(dom.tag(root), "article");
    assert_eq!(dom.id(root), "webslides-zoomed");
    assert_eq!(dom.class_name(root), "grid");
    assert_eq!(dom.attribute(root, "data-theme"), Some("dark"));
    assert_eq!(dom.get_element_by_id("webslides-zoomed"), Some(root));

    // Host keeps its own identity and slides
    let host_root = overlay.host().root;
    assert_eq!(dom.id(host_root), "webslides");
    assert_eq!(dom.children(host_root), overlay.host().slides.as_slice());
}

#[test]
fn test_slide_count_and_order_preserved() {
    let overlay = styled().slides(7).build_overlay();
    let dom = overlay.dom();

    assert_eq!(overlay.slides().len(), overlay.host().slides.len());
    for (i, (slide, original)) in overlay
        .slides()
        .iter()
        .zip(&overlay.host().slides)
        .enumerate()
    {
        assert_eq!(slide.index, i);
        assert_ne!(slide.element, *original);
        assert_eq!(dom.id(slide.element), dom.id(*original));
        assert_eq!(slide_title(dom, slide.element), slide_title(dom, *original));
        assert_eq!(dom.parent(slide.element), Some(slide.wrap));
        assert_eq!(dom.parent(slide.wrap), Some(slide.cell));
        assert_eq!(dom.parent(slide.cell), Some(*overlay.root()));
    }
}

#[test]
fn test_clones_do_not_share_state_with_originals() {
    let mut overlay = styled().slides(2).build_overlay();
    let original = overlay.host().slides[0];
    let clone = overlay.slides()[0].element;
    let original_heading = overlay.dom().children(original)[0];
    let clone_heading = overlay.dom().children(clone)[0];

    let dom: &mut MemoryDom = overlay.dom_mut();
    dom.set_text(clone_heading, "Edited").unwrap();
    assert_eq!(dom.text(original_heading), "Slide 1");

    // Measure pass only touched the clone
    assert_eq!(dom.inline_style(original, "width"), None);
    assert!(dom.inline_style(clone, "width").is_some());
}

#[test]
fn test_zero_slides_builds_empty_overlay() {
    let mut overlay = styled().build_overlay();
    assert!(overlay.slides().is_empty());
    assert!(overlay.dom().children(*overlay.root()).is_empty());

    overlay.zoom_in();
    assert_exclusive_views(&overlay);
    overlay.zoom_out();
    assert_exclusive_views(&overlay);
}

#[test]
fn test_views_mutually_exclusive_for_any_sequence() {
    let mut overlay = styled().slides(2).build_overlay();
    assert_exclusive_views(&overlay);

    // Every sequence of 6 zoom calls
    for pattern in 0u32..64 {
        for step in 0..6 {
            if pattern & (1 << step) == 0 {
                overlay.zoom_in();
            } else {
                overlay.zoom_out();
            }
            assert_exclusive_views(&overlay);
        }
    }
}

#[test]
fn test_zoom_in_idempotent() {
    let mut once = styled().slides(2).build_overlay();
    once.zoom_in();

    let mut twice = styled().slides(2).build_overlay();
    twice.zoom_in();
    twice.zoom_in();

    for overlay in [&once, &twice] {
        assert_eq!(overlay.mode(), ViewMode::Grid);
        assert!(overlay.dom().is_visible(overlay.root()));
        assert!(!overlay.dom().is_visible(&overlay.host().root));
    }
}

#[test]
fn test_zoom_out_idempotent() {
    let mut overlay = styled().slides(1).build_overlay();
    overlay.zoom_in();
    overlay.zoom_out();
    overlay.zoom_out();
    assert_eq!(overlay.mode(), ViewMode::Normal);
    assert_exclusive_views(&overlay);
}

#[test]
fn test_zoom_out_key_ignored_in_grid_mode() {
    let mut overlay = styled().slides(2).build_overlay();
    overlay.zoom_in();
    for code in MINUS {
        assert_eq!(overlay.handle_key(code), None);
        assert_eq!(overlay.mode(), ViewMode::Grid);
    }
}

#[test]
fn test_zoom_in_key_ignored_in_normal_mode() {
    let mut overlay = styled().slides(2).build_overlay();
    for code in PLUS {
        assert_eq!(overlay.handle_key(code), None);
        assert_eq!(overlay.mode(), ViewMode::Normal);
    }
    assert_exclusive_views(&overlay);
}

#[test]
fn test_custom_config_classes_and_keys() {
    let (dom, host) = styled()
        .rule("cell", "width", "50%")
        .slides(2)
        .build();
    let mut config = ZoomConfig {
        overlay_id: "overview".to_string(),
        grid_class: "tiles".to_string(),
        cell_class: "cell".to_string(),
        wrap_class: "inner".to_string(),
        wrapper_tag: "span".to_string(),
        ..ZoomConfig::default()
    };
    config.keys.zoom_out = vec![79]; // 'o'
    config.keys.zoom_in = vec![27]; // Escape

    let mut overlay = ZoomOverlay::build(dom, host, config).unwrap();
    {
        let dom = overlay.dom();
        assert_eq!(dom.id(*overlay.root()), "overview");
        assert_eq!(dom.class_name(*overlay.root()), "tiles");
        let slide = &overlay.slides()[0];
        assert_eq!(dom.tag(slide.cell), "span");
        assert_eq!(dom.class_name(slide.cell), "cell");
        assert_eq!(dom.class_name(slide.wrap), "inner");
        assert_eq!(slide.layout.unwrap().scale.value(), 2.0);
    }

    assert_eq!(overlay.handle_key(MINUS_KEY), None);
    assert_eq!(overlay.handle_key(79), Some(ViewMode::Grid));
    assert_eq!(overlay.handle_key(27), Some(ViewMode::Normal));
}

/// Shared document whose inline style writes are rejected, like a browser
/// refusing `style` on a non-HTML element.
struct StyleRejectingDom(Rc<RefCell<MemoryDom>>);

impl Dom for StyleRejectingDom {
    type Node = NodeId;

    fn clone_node(&mut self, node: &NodeId, deep: bool) -> slidezoom::Result<NodeId> {
        self.0.borrow_mut().clone_node(node, deep)
    }

    fn set_id(&mut self, node: &NodeId, id: &str) {
        self.0.borrow_mut().set_id(node, id);
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        self.0.borrow_mut().set_class_name(node, class_name);
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> slidezoom::Result<()> {
        self.0.borrow_mut().append_child(parent, child)
    }

    fn insert_after(&mut self, node: &NodeId, reference: &NodeId) -> slidezoom::Result<()> {
        self.0.borrow_mut().insert_after(node, reference)
    }

    fn wrap(&mut self, node: &NodeId, tag: &str) -> slidezoom::Result<NodeId> {
        self.0.borrow_mut().wrap(node, tag)
    }

    fn remove(&mut self, node: &NodeId) {
        self.0.borrow_mut().remove(node);
    }

    fn hide(&mut self, node: &NodeId) {
        self.0.borrow_mut().hide(node);
    }

    fn show(&mut self, node: &NodeId) {
        self.0.borrow_mut().show(node);
    }

    fn is_visible(&self, node: &NodeId) -> bool {
        self.0.borrow().is_visible(node)
    }

    fn computed_style(&self, node: &NodeId, property: &str) -> String {
        self.0.borrow().computed_style(node, property)
    }

    fn set_style(
        &mut self,
        _node: &NodeId,
        property: &str,
        _value: &str,
    ) -> slidezoom::Result<()> {
        Err(ZoomError::Dom(format!("cannot set {property}")))
    }

    fn viewport(&self) -> Viewport {
        self.0.borrow().viewport()
    }
}

#[test]
fn test_failed_build_removes_overlay_from_document() {
    let (dom, host) = styled().slides(2).with_trailing_sibling().build();
    let shared = Rc::new(RefCell::new(dom));
    let host_root = host.root;

    let result = ZoomOverlay::build(
        StyleRejectingDom(Rc::clone(&shared)),
        host,
        ZoomConfig::default(),
    );
    assert!(matches!(result, Err(ZoomError::Dom(_))));

    let dom = shared.borrow();
    assert_eq!(dom.get_element_by_id("webslides-zoomed"), None);
    assert_eq!(dom.tag(dom.next_sibling(host_root).unwrap()), "footer");
    assert_eq!(dom.children(dom.body()).len(), 2);
    // Host slides untouched
    assert_eq!(dom.children(host_root).len(), 2);
}

#[test]
fn test_rebuild_after_failure_has_single_overlay() {
    let (dom, host) = styled().slides(1).build();
    let shared = Rc::new(RefCell::new(dom));

    let failed = ZoomOverlay::build(
        StyleRejectingDom(Rc::clone(&shared)),
        host.clone(),
        ZoomConfig::default(),
    );
    assert!(failed.is_err());

    let dom = shared.borrow().clone();
    let overlay = ZoomOverlay::build(dom, host, ZoomConfig::default()).unwrap();
    let dom = overlay.dom();
    let overlays = dom
        .descendants(dom.body())
        .into_iter()
        .filter(|&node| dom.id(node) == "webslides-zoomed")
        .count();
    assert_eq!(overlays, 1);
}
