//! The seam between the behaviors and whatever tree they run against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `web-sys` directly. They read and write the tree
//! through [`Dom`], which has two implementations: [`MemoryDom`], an arena
//! tree used by tests and native hosts, and `WebDom` (`hydrate` only), a thin
//! wrapper over the live document.
//!
//! Selectors are a closed enum rather than free CSS strings so the in-memory
//! tree can match them without a selector engine; [`Selector::to_css`] renders
//! the same selector for the browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod memory;
#[cfg(feature = "hydrate")]
mod web;

use std::cmp::Ordering;
use std::fmt;

pub use memory::{MemoryDom, NodeId};
#[cfg(feature = "hydrate")]
pub use web::WebDom;

/// The subset of CSS selectors the behaviors need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `tag`
    Tag(&'a str),
    /// `.class`
    Class(&'a str),
    /// `tag.class`
    TagClass(&'a str, &'a str),
    /// `tag[attr]` or `tag[attr="value"]`
    TagAttr { tag: &'a str, attr: &'a str, value: Option<&'a str> },
    /// `a, b, c`
    AnyOf(&'a [Selector<'a>]),
}

impl Selector<'_> {
    /// Render as a CSS selector list.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Tag(tag) => (*tag).to_owned(),
            Self::Class(class) => format!(".{class}"),
            Self::TagClass(tag, class) => format!("{tag}.{class}"),
            Self::TagAttr { tag, attr, value: None } => format!("{tag}[{attr}]"),
            Self::TagAttr { tag, attr, value: Some(value) } => format!("{tag}[{attr}=\"{value}\"]"),
            Self::AnyOf(parts) => parts.iter().map(Selector::to_css).collect::<Vec<_>>().join(", "),
        }
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Element-level operations over a UI tree.
///
/// Every method tolerates nodes that have been detached; reads return empty
/// values and writes are ignored where the underlying tree allows it.
pub trait Dom {
    type Node: Clone + PartialEq + fmt::Debug;

    /// All descendants of `scope` (or of the whole document) matching
    /// `selector`, in document order.
    fn query_all(&self, scope: Option<&Self::Node>, selector: &Selector<'_>) -> Vec<Self::Node>;

    /// First match in document order.
    fn query(&self, scope: Option<&Self::Node>, selector: &Selector<'_>) -> Option<Self::Node> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn matches(&self, node: &Self::Node, selector: &Selector<'_>) -> bool;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Element children, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &Selector<'_>) -> Option<Self::Node> {
        let mut current = Some(node.clone());
        while let Some(candidate) = current {
            if self.matches(&candidate, selector) {
                return Some(candidate);
            }
            current = self.parent(&candidate);
        }
        None
    }

    /// Whether `node` is `ancestor` or lies beneath it.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool {
        let mut current = Some(node.clone());
        while let Some(candidate) = current {
            if &candidate == ancestor {
                return true;
            }
            current = self.parent(&candidate);
        }
        false
    }

    /// Whether the node is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Concatenated text of the node and its descendants.
    fn text(&self, node: &Self::Node) -> String;
    /// Replace the node's content with a single text run.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Current value of a form field; empty for anything else.
    fn value(&self, node: &Self::Node) -> String;

    fn is_required(&self, node: &Self::Node) -> bool {
        self.attribute(node, "required").is_some()
    }

    fn is_disabled(&self, node: &Self::Node) -> bool {
        self.attribute(node, "disabled").is_some()
    }

    fn set_disabled(&mut self, node: &Self::Node, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    fn remove_style(&mut self, node: &Self::Node, property: &str);

    /// Create a detached element; `None` if the tree rejects the tag.
    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;
    /// Insert `child` before the first child of `parent`.
    fn prepend_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Move `child` to the end of `parent`; attached nodes are moved, not copied.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Detach `node` from its parent.
    fn remove(&mut self, node: &Self::Node);

    /// Submit a form without firing its submit event.
    fn submit(&mut self, form: &Self::Node);
    /// Programmatically click an element (link navigation).
    fn activate(&mut self, node: &Self::Node);

    /// Path component of the current location.
    fn location_path(&self) -> String;

    /// Display order of two cell texts.
    fn compare_text(&self, a: &str, b: &str) -> Ordering {
        crate::util::collate::collate(a, b)
    }
}
