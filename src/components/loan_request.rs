//! "Request loan" buttons backed by an asynchronous GET.
//!
//! Each button is its own [`LoanRequestState`] machine; the page only maps
//! request tickets back to buttons. A click is always kept from navigating.
//! Whether it also issues a request is up to the state machine guard.
//!
//! ERROR HANDLING
//! ==============
//! Status and transport failures both end in `Error`: one danger
//! notification and an interactive button the user can click again.

#[cfg(test)]
#[path = "loan_request_test.rs"]
mod loan_request_test;

use crate::consts::{ATTR_BOOK_ID, LOAN_BUTTON_CLASS, MSG_LOAN_SENT};
use crate::dom::{Dom, Selector};
use crate::net::loan::{LoanRequestError, request_url};
use crate::page::{EventKind, EventOutcome, Handler, Page};
use crate::state::loan::LoanRequestState;
use crate::state::notification::Severity;

use super::notification_center;

fn book_url<D: Dom>(page: &Page<D>, button: &D::Node) -> Option<String> {
    let book_id = page.dom.attribute(button, ATTR_BOOK_ID)?;
    request_url(&page.config.loan_endpoint_prefix, &book_id)
}

pub(crate) fn attach<D: Dom>(page: &mut Page<D>) -> usize {
    let mut attached = 0;
    for button in page.dom.query_all(None, &Selector::Class(LOAN_BUTTON_CLASS)) {
        if book_url(page, &button).is_none() {
            log::warn!("loan button without a usable {ATTR_BOOK_ID}, skipped");
            continue;
        }
        page.listen(button, EventKind::Click, Handler::LoanClick);
        attached += 1;
    }
    attached
}

pub(crate) fn on_click<D: Dom>(page: &mut Page<D>, button: &D::Node) -> EventOutcome {
    let state = LoanRequestState::read(&page.dom, button);
    let next = match state.begin() {
        Ok(next) => next,
        Err(err) => {
            log::debug!("loan click ignored: {err}");
            return EventOutcome::PreventDefault;
        }
    };
    let Some(url) = book_url(page, button) else {
        return EventOutcome::PreventDefault;
    };
    next.project(&mut page.dom, button);
    let ticket = page.issue_request(button.clone(), url);
    log::debug!("loan request {ticket} issued");
    EventOutcome::PreventDefault
}

pub(crate) fn on_complete<D: Dom>(
    page: &mut Page<D>,
    button: &D::Node,
    result: Result<(), LoanRequestError>,
    now_ms: u64,
) {
    if !page.dom.is_connected(button) {
        log::debug!("loan response for a detached button ignored");
        return;
    }
    let state = LoanRequestState::read(&page.dom, button);
    let next = match state.complete(result.is_ok()) {
        Ok(next) => next,
        Err(err) => {
            log::warn!("loan response dropped: {err}");
            return;
        }
    };
    next.project(&mut page.dom, button);
    match result {
        Ok(()) => {
            log::info!("loan request accepted");
            notification_center::show(page, MSG_LOAN_SENT, Severity::Success, now_ms);
        }
        Err(err) => {
            log::warn!("{err}");
            notification_center::show(page, err.user_message(), Severity::Danger, now_ms);
        }
    }
}
