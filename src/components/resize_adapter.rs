//! Drops fixed card heights on narrow viewports.
//!
//! Resize events are debounced; only the width reported by the last event in
//! a burst is looked at.

#[cfg(test)]
#[path = "resize_adapter_test.rs"]
mod resize_adapter_test;

use crate::consts::{CARD_CLASS, CARD_HEIGHT_STYLES};
use crate::dom::{Dom, Selector};
use crate::page::{Page, Task};

pub(crate) fn on_resize<D: Dom>(page: &mut Page<D>, width: u32, now_ms: u64) {
    page.pending_width = Some(width);
    page.timers.restart(now_ms.saturating_add(page.config.resize_debounce_ms), Task::ResizeDebounce);
}

pub(crate) fn apply<D: Dom>(page: &mut Page<D>) {
    let Some(width) = page.pending_width.take() else {
        return;
    };
    if width >= page.config.mobile_breakpoint_px {
        return;
    }
    let cards = page.dom.query_all(None, &Selector::Class(CARD_CLASS));
    for card in &cards {
        for property in CARD_HEIGHT_STYLES {
            page.dom.remove_style(card, property);
        }
    }
    log::debug!("viewport {width}px: released height on {} card(s)", cards.len());
}
