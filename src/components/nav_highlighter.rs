//! Marks the navigation link for the current page.

#[cfg(test)]
#[path = "nav_highlighter_test.rs"]
mod nav_highlighter_test;

use crate::consts::{ACTIVE, NAV_LINK_CLASS};
use crate::dom::{Dom, Selector};
use crate::page::Page;
use crate::util::nav::is_current;

pub(crate) fn attach<D: Dom>(page: &mut Page<D>) -> usize {
    let path = page.dom.location_path();
    let mut active = 0;
    for link in page.dom.query_all(None, &Selector::Class(NAV_LINK_CLASS)) {
        if is_current(page.dom.attribute(&link, "href").as_deref(), &path) {
            page.dom.add_class(&link, ACTIVE);
            active += 1;
        }
    }
    active
}
