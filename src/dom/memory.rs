//! In-memory document used on native targets.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Computed style is
//! emulated: an inline style wins, otherwise the last matching class rule
//! from the stylesheet applies. Nothing is laid out; the one layout effect
//! modelled is `max-height`, which clamps a pixel `height`.

use std::collections::BTreeMap;
use std::fmt;

use super::Dom;
use crate::css::{px, CssLength};
use crate::error::{Result, ZoomError};
use crate::layout::Viewport;

/// Arena index of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    id: String,
    class_name: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct StyleRule {
    class: String,
    property: String,
    value: String,
}

/// Arena-backed document with a `<body>` root.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    rules: Vec<StyleRule>,
    body: NodeId,
    viewport: Viewport,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl MemoryDom {
    pub fn new(viewport: Viewport) -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..NodeData::default()
        };
        Self {
            nodes: vec![body],
            rules: Vec::new(),
            body: NodeId(0),
            viewport,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        })
    }

    /// Add a stylesheet rule `.class { property: value }`.
    pub fn add_rule(&mut self, class: &str, property: &str, value: &str) {
        self.rules.push(StyleRule {
            class: class.to_string(),
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).ok()?.attributes.get(name).map(String::as_str)
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        text.clone_into(&mut self.node_mut(node)?.text);
        Ok(())
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.node(node).map(|n| n.text.as_str()).unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> &str {
        self.node(node).map(|n| n.tag.as_str()).unwrap_or_default()
    }

    pub fn id(&self, node: NodeId) -> &str {
        self.node(node).map(|n| n.id.as_str()).unwrap_or_default()
    }

    pub fn class_name(&self, node: NodeId) -> &str {
        self.node(node)
            .map(|n| n.class_name.as_str())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.class_name(node).split_whitespace().any(|c| c == class)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let pos = siblings.iter().position(|&c| c == node)?;
        siblings.get(pos + 1).copied()
    }

    /// Inline style value, ignoring the stylesheet.
    pub fn inline_style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node).ok()?.style.get(property).map(String::as_str)
    }

    /// All descendants of `root` in document order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// First attached element with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&node| self.id(node) == id)
    }

    /// Whether `node` is reachable from `<body>`.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.body {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(data);
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, node: NodeId) -> Result<&NodeData> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| ZoomError::Dom(format!("unknown {node}")))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| ZoomError::Dom(format!("unknown {node}")))
    }

    /// Inline value, else the last matching class rule, else empty.
    fn declared_style(&self, node: NodeId, property: &str) -> String {
        let Ok(data) = self.node(node) else {
            return String::new();
        };
        if let Some(value) = data.style.get(property) {
            return value.clone();
        }
        self.rules
            .iter()
            .rev()
            .find(|rule| {
                rule.property == property
                    && data.class_name.split_whitespace().any(|c| c == rule.class)
            })
            .map(|rule| rule.value.clone())
            .unwrap_or_default()
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.node_mut(node)?.parent.take() {
            self.node_mut(parent)?.children.retain(|&c| c != node);
        }
        Ok(())
    }

    fn clone_subtree(&mut self, source: NodeId, deep: bool) -> Result<NodeId> {
        let data = self.node(source)?.clone();
        let copy = self.push(NodeData {
            parent: None,
            children: Vec::new(),
            ..data.clone()
        });
        if deep {
            for child in data.children {
                let child_copy = self.clone_subtree(child, true)?;
                self.node_mut(child_copy)?.parent = Some(copy);
                self.node_mut(copy)?.children.push(child_copy);
            }
        }
        Ok(copy)
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn clone_node(&mut self, node: &NodeId, deep: bool) -> Result<NodeId> {
        self.clone_subtree(*node, deep)
    }

    fn set_id(&mut self, node: &NodeId, id: &str) {
        if let Ok(data) = self.node_mut(*node) {
            id.clone_into(&mut data.id);
        }
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        if let Ok(data) = self.node_mut(*node) {
            class_name.clone_into(&mut data.class_name);
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.node(*parent)?;
        if self.is_ancestor_or_self(*child, *parent) {
            return Err(ZoomError::Dom(format!(
                "cannot append {child} inside its own subtree"
            )));
        }
        self.detach(*child)?;
        self.node_mut(*child)?.parent = Some(*parent);
        self.node_mut(*parent)?.children.push(*child);
        Ok(())
    }

    fn insert_after(&mut self, node: &NodeId, reference: &NodeId) -> Result<()> {
        let parent = self
            .parent(*reference)
            .ok_or_else(|| ZoomError::Dom(format!("{reference} has no parent")))?;
        if self.is_ancestor_or_self(*node, parent) {
            return Err(ZoomError::Dom(format!(
                "cannot insert {node} inside its own subtree"
            )));
        }
        self.detach(*node)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings
            .iter()
            .position(|c| c == reference)
            .map_or(siblings.len(), |p| p + 1);
        siblings.insert(pos, *node);
        self.node_mut(*node)?.parent = Some(parent);
        Ok(())
    }

    fn wrap(&mut self, node: &NodeId, tag: &str) -> Result<NodeId> {
        self.node(*node)?;
        let wrapper = self.create_element(tag);
        if let Some(parent) = self.parent(*node) {
            let siblings = &mut self.node_mut(parent)?.children;
            if let Some(slot) = siblings.iter_mut().find(|c| **c == *node) {
                *slot = wrapper;
            }
            self.node_mut(wrapper)?.parent = Some(parent);
        }
        self.node_mut(*node)?.parent = Some(wrapper);
        self.node_mut(wrapper)?.children.push(*node);
        Ok(wrapper)
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node).ok();
    }

    fn hide(&mut self, node: &NodeId) {
        if let Ok(data) = self.node_mut(*node) {
            data.style.insert("display".to_string(), "none".to_string());
        }
    }

    fn show(&mut self, node: &NodeId) {
        if let Ok(data) = self.node_mut(*node) {
            data.style.remove("display");
        }
    }

    fn is_visible(&self, node: &NodeId) -> bool {
        self.inline_style(*node, "display") != Some("none")
    }

    fn computed_style(&self, node: &NodeId, property: &str) -> String {
        let value = self.declared_style(*node, property);
        if property != "height" {
            return value;
        }
        let max = self.declared_style(*node, "max-height");
        match (CssLength::parse(&value), CssLength::parse(&max)) {
            (Ok(CssLength::Px(height)), Ok(CssLength::Px(max))) if height > max => px(max),
            _ => value,
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<()> {
        self.node_mut(*node)?
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
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
    fn test_wrap_takes_node_place() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let a = dom.create_element("section");
        let b = dom.create_element("section");
        dom.append_child(&body, &a).unwrap();
        dom.append_child(&body, &b).unwrap();

        let wrapper = dom.wrap(&a, "div").unwrap();
        assert_eq!(dom.children(body), &[wrapper, b]);
        assert_eq!(dom.children(wrapper), &[a]);
        assert_eq!(dom.parent(a), Some(wrapper));
    }

    #[test]
    fn test_insert_after_places_next_sibling() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let first = dom.create_element("div");
        let last = dom.create_element("div");
        let middle = dom.create_element("div");
        dom.append_child(&body, &first).unwrap();
        dom.append_child(&body, &last).unwrap();

        dom.insert_after(&middle, &first).unwrap();
        assert_eq!(dom.children(body), &[first, middle, last]);
        assert_eq!(dom.next_sibling(first), Some(middle));
    }

    #[test]
    fn test_insert_after_detached_reference_fails() {
        let mut dom = MemoryDom::default();
        let orphan = dom.create_element("div");
        let node = dom.create_element("div");
        assert!(matches!(
            dom.insert_after(&node, &orphan),
            Err(ZoomError::Dom(_))
        ));
    }

    #[test]
    fn test_append_into_own_subtree_fails() {
        let mut dom = MemoryDom::default();
        let outer = dom.create_element("div");
        let inner = dom.create_element("div");
        dom.append_child(&outer, &inner).unwrap();
        assert!(dom.append_child(&inner, &outer).is_err());
    }

    #[test]
    fn test_shallow_and_deep_clone() {
        let mut dom = MemoryDom::default();
        let root = dom.create_element("section");
        dom.set_class_name(&root, "slide");
        dom.set_attribute(root, "data-title", "Intro").unwrap();
        let child = dom.create_element("h1");
        dom.set_text(child, "Hello").unwrap();
        dom.append_child(&root, &child).unwrap();

        let shallow = dom.clone_node(&root, false).unwrap();
        assert_eq!(dom.class_name(shallow), "slide");
        assert_eq!(dom.attribute(shallow, "data-title"), Some("Intro"));
        assert!(dom.children(shallow).is_empty());
        assert_eq!(dom.parent(shallow), None);

        let deep = dom.clone_node(&root, true).unwrap();
        let copied = dom.children(deep)[0];
        assert_ne!(copied, child);
        assert_eq!(dom.text(copied), "Hello");

        dom.set_text(copied, "Changed").unwrap();
        assert_eq!(dom.text(child), "Hello");
    }

    #[test]
    fn test_computed_style_precedence() {
        let mut dom = MemoryDom::default();
        dom.add_rule("column", "padding-left", "10px");
        dom.add_rule("column", "padding-left", "12px");
        let node = dom.create_element("div");
        dom.set_class_name(&node, "column other");
        assert_eq!(dom.computed_style(&node, "padding-left"), "12px");
        assert_eq!(dom.computed_style(&node, "width"), "");

        dom.set_style(&node, "padding-left", "3px").unwrap();
        assert_eq!(dom.computed_style(&node, "padding-left"), "3px");
    }

    #[test]
    fn test_max_height_clamps_computed_height() {
        let mut dom = MemoryDom::default();
        dom.add_rule("slide", "max-height", "300px");
        let node = dom.create_element("section");
        dom.set_class_name(&node, "slide");

        dom.set_style(&node, "height", "420px").unwrap();
        assert_eq!(dom.inline_style(node, "height"), Some("420px"));
        assert_eq!(dom.computed_style(&node, "height"), "300px");

        dom.set_style(&node, "height", "120px").unwrap();
        assert_eq!(dom.computed_style(&node, "height"), "120px");

        dom.set_style(&node, "max-height", "none").unwrap();
        dom.set_style(&node, "height", "420px").unwrap();
        assert_eq!(dom.computed_style(&node, "height"), "420px");
    }

    #[test]
    fn test_remove_detaches() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let node = dom.create_element("div");
        dom.append_child(&body, &node).unwrap();
        dom.remove(&node);
        assert!(dom.children(body).is_empty());
        assert!(!dom.is_attached(node));
        dom.remove(&node);
    }

    #[test]
    fn test_hide_show() {
        let mut dom = MemoryDom::default();
        let node = dom.create_element("div");
        assert!(dom.is_visible(&node));
        dom.hide(&node);
        dom.hide(&node);
        assert!(!dom.is_visible(&node));
        assert_eq!(dom.computed_style(&node, "display"), "none");
        dom.show(&node);
        assert!(dom.is_visible(&node));
    }
}
