//! Field feedback and submit locking for every form on the page.
//!
//! Focus and blur only touch markers. Submit re-validates every field before
//! the form is allowed to leave: one empty required field cancels the
//! submission, and all of them get flagged in that same attempt. A valid
//! submit locks the form's submit button (disabled, busy label) and a timer
//! releases it so a lost response never strands the control.

#[cfg(test)]
#[path = "form_guard_test.rs"]
mod form_guard_test;

use crate::consts::{FOCUSED, INVALID, LABEL_SUBMITTING, MSG_FIELD_REQUIRED};
use crate::dom::{Dom, Selector};
use crate::page::{EventKind, EventOutcome, Handler, Page, Task};
use crate::state::field::FieldState;
use crate::state::label;
use crate::state::notification::Severity;

use super::notification_center;

const FIELD_PARTS: [Selector<'static>; 3] = [Selector::Tag("input"), Selector::Tag("textarea"), Selector::Tag("select")];
const FIELDS: Selector<'static> = Selector::AnyOf(&FIELD_PARTS);
const SUBMIT_BUTTON: Selector<'static> = Selector::TagAttr { tag: "button", attr: "type", value: Some("submit") };

pub(crate) fn attach<D: Dom>(page: &mut Page<D>) -> usize {
    let mut fields = 0;
    for form in page.dom.query_all(None, &Selector::Tag("form")) {
        for field in page.dom.query_all(Some(&form), &FIELDS) {
            page.listen(field.clone(), EventKind::Focus, Handler::FieldFocus);
            page.listen(field, EventKind::Blur, Handler::FieldBlur);
            fields += 1;
        }
        page.listen(form, EventKind::Submit, Handler::FormSubmit);
    }
    fields
}

pub(crate) fn on_focus<D: Dom>(page: &mut Page<D>, field: &D::Node) {
    page.dom.add_class(field, FOCUSED);
}

pub(crate) fn on_blur<D: Dom>(page: &mut Page<D>, field: &D::Node, now_ms: u64) {
    let was_invalid = page.dom.has_class(field, INVALID);
    let state = FieldState::read(&page.dom, field, false);
    state.project(&mut page.dom, field);

    if !state.valid && !was_invalid && page.config.notify_on_invalid {
        notification_center::show(page, MSG_FIELD_REQUIRED, Severity::Danger, now_ms);
    }
}

pub(crate) fn on_submit<D: Dom>(page: &mut Page<D>, form: &D::Node, now_ms: u64) -> EventOutcome {
    let mut failing = 0;
    for field in page.dom.query_all(Some(form), &FIELDS) {
        let focused = page.dom.has_class(&field, FOCUSED);
        let state = FieldState::read(&page.dom, &field, focused);
        state.project(&mut page.dom, &field);
        if !state.valid {
            failing += 1;
        }
    }
    if failing > 0 {
        log::debug!("submit blocked: {failing} required field(s) empty");
        return EventOutcome::PreventDefault;
    }

    if let Some(button) = page.dom.query(Some(form), &SUBMIT_BUTTON) {
        lock(page, button, now_ms);
    }
    EventOutcome::Continue
}

fn lock<D: Dom>(page: &mut Page<D>, button: D::Node, now_ms: u64) {
    page.dom.set_disabled(&button, true);
    label::replace(&mut page.dom, &button, LABEL_SUBMITTING);
    page.timers.restart(now_ms.saturating_add(page.config.submit_lock_ms), Task::UnlockSubmit(button));
}

pub(crate) fn unlock<D: Dom>(page: &mut Page<D>, button: &D::Node) {
    if !page.dom.is_connected(button) {
        return;
    }
    page.dom.set_disabled(button, false);
    label::restore(&mut page.dom, button);
}
