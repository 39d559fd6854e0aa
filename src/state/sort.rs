//! Column sort direction recorded on a table header.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use crate::consts::{SORT_ASC, SORT_DESC};
use crate::dom::Dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortState {
    /// Parse from the header's `asc`/`desc` class.
    pub fn read<D: Dom>(dom: &D, header: &D::Node) -> Self {
        if dom.has_class(header, SORT_ASC) {
            Self::Ascending
        } else if dom.has_class(header, SORT_DESC) {
            Self::Descending
        } else {
            Self::Unsorted
        }
    }

    /// Direction for the next click: only an ascending header flips to
    /// descending.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Unsorted | Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Unsorted => None,
            Self::Ascending => Some(SORT_ASC),
            Self::Descending => Some(SORT_DESC),
        }
    }

    /// Orient an ascending comparison.
    #[must_use]
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Descending => ordering.reverse(),
            Self::Unsorted | Self::Ascending => ordering,
        }
    }

    /// Replace whatever marker the header carries with this one.
    pub fn project<D: Dom>(self, dom: &mut D, header: &D::Node) {
        dom.remove_class(header, SORT_ASC);
        dom.remove_class(header, SORT_DESC);
        if let Some(marker) = self.marker() {
            dom.add_class(header, marker);
        }
    }
}
