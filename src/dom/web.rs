//! [`Dom`] over the live document.
//!
//! Nodes are `web_sys::Element` handles. JS exceptions from individual calls
//! are logged and treated as "no effect"; a selector or style call failing on
//! one element must not take the page down.
//!
//! Cell text is ordered with `String.prototype.localeCompare` in the page's
//! `<html lang>` locale (Spanish when unset).

use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::{Dom, Selector};
use crate::consts::DEFAULT_COLLATION_LOCALE;

/// Log a failed DOM call and carry on.
fn report<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {err:?}");
            None
        }
    }
}

pub struct WebDom {
    document: Document,
    locales: Array,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        let lang = document
            .document_element()
            .and_then(|root| root.get_attribute("lang"))
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COLLATION_LOCALE.to_owned());
        let locales = Array::of1(&JsValue::from_str(lang.trim()));
        Self { document, locales }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn collect(list: Option<web_sys::NodeList>) -> Vec<Element> {
        let Some(list) = list else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    out.push(element);
                }
            }
        }
        out
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query_all(&self, scope: Option<&Element>, selector: &Selector<'_>) -> Vec<Element> {
        let css = selector.to_css();
        let list = match scope {
            Some(scope) => scope.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        Self::collect(report(&format!("querySelectorAll({css})"), list))
    }

    fn matches(&self, node: &Element, selector: &Selector<'_>) -> bool {
        let css = selector.to_css();
        report(&format!("matches({css})"), node.matches(&css)).unwrap_or(false)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let collection = node.children();
        (0..collection.length()).filter_map(|index| collection.item(index)).collect()
    }

    fn closest(&self, node: &Element, selector: &Selector<'_>) -> Option<Element> {
        let css = selector.to_css();
        report(&format!("closest({css})"), node.closest(&css)).flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        report("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        report("classList.remove", node.class_list().remove_1(class));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        report("setAttribute", node.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        report("removeAttribute", node.remove_attribute(name));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            report("style.setProperty", element.style().set_property(property, value));
        }
    }

    fn remove_style(&mut self, node: &Element, property: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            report("style.removeProperty", element.style().remove_property(property));
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        report("createElement", self.document.create_element(tag))
    }

    fn prepend_child(&mut self, parent: &Element, child: &Element) {
        let first = parent.first_child();
        report("insertBefore", parent.insert_before(child, first.as_ref()));
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        report("appendChild", parent.append_child(child));
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn submit(&mut self, form: &Element) {
        match form.dyn_ref::<HtmlFormElement>() {
            Some(form) => {
                report("form.submit", form.submit());
            }
            None => log::warn!("submit on a non-form element <{}>", form.tag_name()),
        }
    }

    /// Deferred to a fresh task so the synthetic click never re-enters the
    /// listener that triggered it while the page is still borrowed.
    fn activate(&mut self, node: &Element) {
        let Some(element) = node.dyn_ref::<HtmlElement>().cloned() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            element.click();
        });
    }

    fn location_path(&self) -> String {
        let Some(location) = self.document.location() else {
            return String::new();
        };
        report("location.pathname", location.pathname()).unwrap_or_default()
    }

    fn compare_text(&self, a: &str, b: &str) -> Ordering {
        JsString::from(a)
            .locale_compare(b, &self.locales, &Object::new())
            .cmp(&0)
            .then_with(|| a.cmp(b))
    }
}
