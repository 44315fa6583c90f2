//! Browser document access through `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::Dom;
use crate::error::{Result, ZoomError};
use crate::layout::Viewport;

/// [`Dom`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| ZoomError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ZoomError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn html(node: &Element) -> Option<&HtmlElement> {
        node.dyn_ref::<HtmlElement>()
    }

    fn window_dimension(value: std::result::Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn clone_node(&mut self, node: &Element, deep: bool) -> Result<Element> {
        node.clone_node_with_deep(deep)?
            .dyn_into::<Element>()
            .map_err(|_| ZoomError::Dom("cloned node is not an element".to_string()))
    }

    fn set_id(&mut self, node: &Element, id: &str) {
        node.set_id(id);
    }

    fn set_class_name(&mut self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn insert_after(&mut self, node: &Element, reference: &Element) -> Result<()> {
        let parent = reference
            .parent_node()
            .ok_or_else(|| ZoomError::Dom("reference element is detached".to_string()))?;
        parent.insert_before(node, reference.next_sibling().as_ref())?;
        Ok(())
    }

    fn wrap(&mut self, node: &Element, tag: &str) -> Result<Element> {
        let wrapper = self.document.create_element(tag)?;
        if let Some(parent) = node.parent_node() {
            parent.insert_before(&wrapper, Some(node))?;
        }
        wrapper.append_child(node)?;
        Ok(wrapper)
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn hide(&mut self, node: &Element) {
        if let Some(html) = Self::html(node) {
            html.style().set_property("display", "none").ok();
        }
    }

    fn show(&mut self, node: &Element) {
        if let Some(html) = Self::html(node) {
            html.style().remove_property("display").ok();
        }
    }

    fn is_visible(&self, node: &Element) -> bool {
        Self::html(node)
            .and_then(|html| html.style().get_property_value("display").ok())
            .map_or(true, |display| display != "none")
    }

    fn computed_style(&self, node: &Element, property: &str) -> String {
        self.window
            .get_computed_style(node)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<()> {
        let html = Self::html(node)
            .ok_or_else(|| ZoomError::Dom(format!("<{}> has no inline style", node.tag_name())))?;
        html.style().set_property(property, value)?;
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            Self::window_dimension(self.window.inner_width()),
            Self::window_dimension(self.window.inner_height()),
        )
    }
}
