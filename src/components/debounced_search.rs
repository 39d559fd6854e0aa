//! Search-as-you-type that submits once the user pauses.

#[cfg(test)]
#[path = "debounced_search_test.rs"]
mod debounced_search_test;

use crate::dom::{Dom, Selector};
use crate::page::{EventKind, Handler, Page, Task};

const SEARCH_INPUT: Selector<'static> = Selector::TagAttr { tag: "input", attr: "type", value: Some("search") };

pub(crate) fn attach<D: Dom>(page: &mut Page<D>) -> usize {
    let inputs = page.dom.query_all(None, &SEARCH_INPUT);
    let count = inputs.len();
    for input in inputs {
        page.listen(input, EventKind::Input, Handler::SearchInput);
    }
    count
}

/// Every keystroke pushes the deadline back.
pub(crate) fn on_input<D: Dom>(page: &mut Page<D>, input: &D::Node, now_ms: u64) {
    page.timers.restart(now_ms.saturating_add(page.config.search_debounce_ms), Task::SearchDebounce(input.clone()));
}

pub(crate) fn fire<D: Dom>(page: &mut Page<D>, input: &D::Node) {
    if !page.dom.is_connected(input) {
        return;
    }
    if let Some(form) = page.dom.closest(input, &Selector::Tag("form")) {
        log::debug!("search debounce elapsed, submitting form");
        page.dom.submit(&form);
    }
}
