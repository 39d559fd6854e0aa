//! Arena-backed UI tree.
//!
//! Mirrors the DOM closely enough for the behaviors: element tags, ordered
//! class lists, attributes, inline styles, text runs and form values.
//! Programmatic form submissions and link activations are recorded instead
//! of navigating, so hosts and tests can observe them.

use std::collections::BTreeMap;

use super::{Dom, Selector};

/// Handle to an element in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Debug)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    location_path: String,
    submissions: Vec<NodeId>,
    activations: Vec<NodeId>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// An empty document whose root is a `body` element, located at `/`.
    #[must_use]
    pub fn new() -> Self {
        let body = NodeData { tag: "body".to_owned(), ..NodeData::default() };
        Self {
            nodes: vec![body],
            root: NodeId(0),
            location_path: "/".to_owned(),
            submissions: Vec::new(),
            activations: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_location_path(&mut self, path: &str) {
        path.clone_into(&mut self.location_path);
    }

    /// Create an element and append it to `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.new_node(tag);
        self.append_child(&parent, &child);
        child
    }

    /// Create an element holding `text` and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, tag: &str, text: &str) -> NodeId {
        let child = self.append(parent, tag);
        self.set_text(&child, text);
        child
    }

    /// Simulate the user editing a field.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(data) = self.node_mut(node) {
            value.clone_into(&mut data.value);
        }
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|data| data.tag.as_str())
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.node(node).map_or_else(Vec::new, |data| data.classes.clone())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node)?.styles.get(property).map(String::as_str)
    }

    /// Forms submitted through [`Dom::submit`], oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[NodeId] {
        &self.submissions
    }

    /// Elements clicked through [`Dom::activate`], oldest first.
    #[must_use]
    pub fn activations(&self) -> &[NodeId] {
        &self.activations
    }

    fn new_node(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { tag: tag.to_owned(), ..NodeData::default() });
        id
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0)
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node_mut(id).and_then(|data| data.parent.take()) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|child| *child != id);
        }
    }

    fn collect_descendants(&self, id: NodeId, selector: &Selector<'_>, out: &mut Vec<NodeId>) {
        let Some(data) = self.node(id) else {
            return;
        };
        for child in &data.children {
            if self.matches(child, selector) {
                out.push(*child);
            }
            self.collect_descendants(*child, selector, out);
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.node(id) else {
            return;
        };
        out.push_str(&data.text);
        for child in &data.children {
            self.collect_text(*child, out);
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query_all(&self, scope: Option<&NodeId>, selector: &Selector<'_>) -> Vec<NodeId> {
        let mut out = Vec::new();
        match scope {
            Some(scope) => self.collect_descendants(*scope, selector, &mut out),
            None => {
                if self.matches(&self.root, selector) {
                    out.push(self.root);
                }
                self.collect_descendants(self.root, selector, &mut out);
            }
        }
        out
    }

    fn matches(&self, node: &NodeId, selector: &Selector<'_>) -> bool {
        let Some(data) = self.node(*node) else {
            return false;
        };
        match selector {
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
            Selector::Class(class) => data.classes.iter().any(|c| c == class),
            Selector::TagClass(tag, class) => {
                data.tag.eq_ignore_ascii_case(tag) && data.classes.iter().any(|c| c == class)
            }
            Selector::TagAttr { tag, attr, value } => {
                data.tag.eq_ignore_ascii_case(tag)
                    && match (data.attributes.get(*attr), value) {
                        (Some(_), None) => true,
                        (Some(actual), Some(expected)) => actual == expected,
                        (None, _) => false,
                    }
            }
            Selector::AnyOf(parts) => parts.iter().any(|part| self.matches(node, part)),
        }
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node)?.parent
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node).map_or_else(Vec::new, |data| data.children.clone())
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&self.root, node)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.node(*node).is_some_and(|data| data.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(data) = self.node_mut(*node) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_owned());
            }
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        if let Some(data) = self.node_mut(*node) {
            data.classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.node(*node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(data) = self.node_mut(*node) {
            data.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        if let Some(data) = self.node_mut(*node) {
            data.attributes.remove(name);
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.collect_text(*node, &mut out);
        out
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        for child in self.children(node) {
            self.detach(child);
        }
        if let Some(data) = self.node_mut(*node) {
            text.clone_into(&mut data.text);
        }
    }

    fn value(&self, node: &NodeId) -> String {
        self.node(*node).map_or_else(String::new, |data| data.value.clone())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        if let Some(data) = self.node_mut(*node) {
            data.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn remove_style(&mut self, node: &NodeId, property: &str) {
        if let Some(data) = self.node_mut(*node) {
            data.styles.remove(property);
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.new_node(tag))
    }

    fn prepend_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.node(*parent).is_none() || self.contains(child, parent) {
            return;
        }
        self.detach(*child);
        if let Some(data) = self.node_mut(*parent) {
            data.children.insert(0, *child);
        }
        if let Some(data) = self.node_mut(*child) {
            data.parent = Some(*parent);
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.node(*parent).is_none() || self.contains(child, parent) {
            return;
        }
        self.detach(*child);
        if let Some(data) = self.node_mut(*parent) {
            data.children.push(*child);
        }
        if let Some(data) = self.node_mut(*child) {
            data.parent = Some(*parent);
        }
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn submit(&mut self, form: &NodeId) {
        self.submissions.push(*form);
    }

    fn activate(&mut self, node: &NodeId) {
        self.activations.push(*node);
    }

    fn location_path(&self) -> String {
        self.location_path.clone()
    }
}
