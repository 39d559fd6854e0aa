//! Transient notifications inserted at the top of the message region.
//!
//! Every notification runs the same lifecycle on its own timer pair: open on
//! insert, `fade-out` after the display delay, detached after the fade
//! delay. Server-rendered flash messages (`.messages .alert`) present at
//! load go through the closing half of the same lifecycle.
//!
//! ERROR HANDLING
//! ==============
//! Fire-and-forget. A page without a message region silently drops
//! notifications; an element someone else already removed makes its pending
//! timers no-ops.

#[cfg(test)]
#[path = "notification_center_test.rs"]
mod notification_center_test;

use crate::consts::{ALERT_CLASS, FLASH_REGION_CLASS};
use crate::dom::{Dom, Selector};
use crate::page::{Page, Task};
use crate::state::notification::{NotificationPhase, NotificationRecord, Severity};

/// Schedule the closing lifecycle for flash messages already on the page.
pub(crate) fn attach<D: Dom>(page: &mut Page<D>, now_ms: u64) -> usize {
    let mut flashes = Vec::new();
    for region in page.dom.query_all(None, &Selector::Class(FLASH_REGION_CLASS)) {
        flashes.extend(page.dom.query_all(Some(&region), &Selector::Class(ALERT_CLASS)));
    }
    let close_at = now_ms.saturating_add(page.config.notification_display_ms);
    for alert in &flashes {
        page.timers.schedule(close_at, Task::CloseNotification(alert.clone()));
    }
    flashes.len()
}

/// Insert a notification as the first child of the message region.
pub fn show<D: Dom>(page: &mut Page<D>, text: &str, severity: Severity, now_ms: u64) -> Option<NotificationRecord> {
    let Some(region) = page.dom.query(None, &Selector::Class(&page.config.message_region)) else {
        log::debug!("notification dropped, no .{} region: {text}", page.config.message_region);
        return None;
    };
    let record = NotificationRecord::new(text, severity, now_ms);
    let Some(element) = record.render(&mut page.dom) else {
        log::warn!("notification dropped, could not create its element: {text}");
        return None;
    };
    page.dom.prepend_child(&region, &element);
    page.timers.schedule(record.closes_at(page.config.notification_display_ms), Task::CloseNotification(element));
    log::debug!("notification {} shown ({})", record.id, severity.as_str());
    Some(record)
}

pub(crate) fn begin_closing<D: Dom>(page: &mut Page<D>, element: &D::Node, now_ms: u64) {
    if !page.dom.is_connected(element) {
        return;
    }
    NotificationPhase::Closing.project(&mut page.dom, element);
    page.timers.schedule(
        now_ms.saturating_add(page.config.notification_fade_ms),
        Task::RemoveNotification(element.clone()),
    );
}

pub(crate) fn retire<D: Dom>(page: &mut Page<D>, element: &D::Node) {
    if page.dom.is_connected(element) {
        page.dom.remove(element);
    }
}
