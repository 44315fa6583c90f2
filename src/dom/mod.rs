//! DOM access for the zoom overlay.
//!
//! The overlay only needs a handful of DOM helpers, collected in the [`Dom`]
//! trait. [`WebDom`] drives the real document through `web-sys`;
//! [`MemoryDom`] is a small in-memory tree with a class stylesheet that
//! stands in for the layout engine on native targets.
//!
//! Style properties use CSS names (`padding-left`, not `paddingLeft`).
//! A computed value is what the layout engine resolved, which may differ
//! from the inline value set through [`Dom::set_style`].

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryDom, NodeId};
#[cfg(target_arch = "wasm32")]
pub use web::WebDom;

use crate::error::Result;
use crate::layout::Viewport;

/// DOM helpers consumed by [`crate::overlay::ZoomOverlay`].
pub trait Dom {
    /// Handle to an element. Cloning the handle never clones the element.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// Copy an element. A shallow copy keeps tag and attributes only; a deep
    /// copy includes all descendants. The copy is detached.
    fn clone_node(&mut self, node: &Self::Node, deep: bool) -> Result<Self::Node>;

    fn set_id(&mut self, node: &Self::Node, id: &str);

    fn set_class_name(&mut self, node: &Self::Node, class_name: &str);

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    /// Insert `node` as the next sibling of `reference`.
    fn insert_after(&mut self, node: &Self::Node, reference: &Self::Node) -> Result<()>;

    /// Create a `tag` element in `node`'s place and move `node` inside it.
    /// Returns the new wrapper.
    fn wrap(&mut self, node: &Self::Node, tag: &str) -> Result<Self::Node>;

    /// Detach `node` from its parent. A detached node is left as is.
    fn remove(&mut self, node: &Self::Node);

    fn hide(&mut self, node: &Self::Node);

    fn show(&mut self, node: &Self::Node);

    fn is_visible(&self, node: &Self::Node) -> bool;

    /// Computed value of a CSS property, or an empty string if unavailable.
    fn computed_style(&self, node: &Self::Node, property: &str) -> String;

    /// Set an inline style property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> Result<()>;

    fn viewport(&self) -> Viewport;
}

/// The host presentation as seen at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct HostView<N> {
    /// Live presentation root.
    pub root: N,
    /// Slide elements in presentation order.
    pub slides: Vec<N>,
}

impl<N> HostView<N> {
    pub fn new(root: N, slides: Vec<N>) -> Self {
        Self { root, slides }
    }
}
