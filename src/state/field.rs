//! Validation state of a single form field.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::consts::{FOCUSED, INVALID};
use crate::dom::Dom;

/// Snapshot of a field at the moment of an event. Never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub required: bool,
    pub valid: bool,
    pub focused: bool,
}

/// Whitespace-only values do not satisfy `required`.
#[must_use]
pub fn is_valid_value(required: bool, value: &str) -> bool {
    !required || !value.trim().is_empty()
}

impl FieldState {
    #[must_use]
    pub fn evaluate(required: bool, value: &str, focused: bool) -> Self {
        Self { required, valid: is_valid_value(required, value), focused }
    }

    /// Read the field's current value and `required` flag.
    pub fn read<D: Dom>(dom: &D, field: &D::Node, focused: bool) -> Self {
        Self::evaluate(dom.is_required(field), &dom.value(field), focused)
    }

    /// Mirror onto the `focused` and `is-invalid` markers.
    pub fn project<D: Dom>(self, dom: &mut D, field: &D::Node) {
        if self.focused {
            dom.add_class(field, FOCUSED);
        } else {
            dom.remove_class(field, FOCUSED);
        }
        if self.valid {
            dom.remove_class(field, INVALID);
        } else {
            dom.add_class(field, INVALID);
        }
    }
}
