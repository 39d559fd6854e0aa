//! Original-label capture for controls whose text is swapped while busy.
//!
//! The first swap stores the control's text in `data-original-label`; later
//! swaps reuse it, so a control that is locked twice still restores the text
//! it was rendered with rather than a busy label.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use crate::consts::ATTR_ORIGINAL_LABEL;
use crate::dom::Dom;

/// Capture the label once and return the captured value.
pub fn capture<D: Dom>(dom: &mut D, control: &D::Node) -> String {
    if let Some(label) = dom.attribute(control, ATTR_ORIGINAL_LABEL) {
        return label;
    }
    let label = dom.text(control);
    dom.set_attribute(control, ATTR_ORIGINAL_LABEL, &label);
    label
}

/// Swap in `busy`, capturing the original first.
pub fn replace<D: Dom>(dom: &mut D, control: &D::Node, busy: &str) {
    capture(dom, control);
    dom.set_text(control, busy);
}

/// Put the captured label back; no-op if nothing was captured.
pub fn restore<D: Dom>(dom: &mut D, control: &D::Node) {
    if let Some(label) = dom.attribute(control, ATTR_ORIGINAL_LABEL) {
        dom.set_text(control, &label);
    }
}
