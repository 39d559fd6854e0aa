//! Testable page core: listener table, dispatch, timers and in-flight loans.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Page` plays the role `EngineCore` plays for the canvas: all behavior, no
//! browser. A host feeds it three kinds of input, always with the current
//! time in milliseconds:
//!
//! - UI events, either through [`Page::invoke`] (one call per real listener,
//!   the browser bridge) or [`Page::dispatch`] (bubbling emulation over the
//!   listener table, for [`crate::MemoryDom`] hosts);
//! - timer expiry through [`Page::run_due`], guided by [`Page::next_deadline`];
//! - loan completions through [`Page::complete_loan`], for the requests it
//!   drained with [`Page::take_requests`].
//!
//! DESIGN
//! ======
//! Per-element state lives on the elements (see [`crate::state`]). The page
//! only holds scheduling bookkeeping: which listener runs which handler,
//! which timers are pending, and which ticket belongs to which button.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::components::{debounced_search, form_guard, loan_request, nav_highlighter, notification_center};
use crate::components::{resize_adapter, table_sorter};
use crate::config::UiConfig;
use crate::dom::Dom;
use crate::net::loan::{LoanRequest, LoanRequestError};
use crate::state::notification::{NotificationRecord, Severity};
use crate::timers::TimerQueue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Focus,
    Blur,
    Submit,
    Click,
    Input,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
            Self::Click => "click",
            Self::Input => "input",
        }
    }

    /// Focus and blur stay on their target; the rest propagate upward.
    #[must_use]
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// Whether the event's default action (navigation, form post) may proceed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventOutcome {
    #[default]
    Continue,
    PreventDefault,
}

impl EventOutcome {
    fn merge(self, other: Self) -> Self {
        if self == Self::PreventDefault || other == Self::PreventDefault {
            Self::PreventDefault
        } else {
            Self::Continue
        }
    }
}

/// What a registered listener does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    FieldFocus,
    FieldBlur,
    FormSubmit,
    SortColumn { column: usize },
    RowClick,
    SearchInput,
    LoanClick,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listener<N> {
    pub node: N,
    pub kind: EventKind,
    pub handler: Handler,
}

/// Index into [`Page::listeners`].
pub type ListenerId = usize;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Task<N> {
    CloseNotification(N),
    RemoveNotification(N),
    UnlockSubmit(N),
    SearchDebounce(N),
    ResizeDebounce,
}

#[derive(Debug)]
struct InFlight<N> {
    ticket: u64,
    button: N,
}

pub struct Page<D: Dom> {
    pub(crate) dom: D,
    pub(crate) config: UiConfig,
    pub(crate) timers: TimerQueue<Task<D::Node>>,
    /// Width reported by the latest resize, consumed by the debounced call.
    pub(crate) pending_width: Option<u32>,
    listeners: Vec<Listener<D::Node>>,
    in_flight: Vec<InFlight<D::Node>>,
    outbox: Vec<LoanRequest>,
    next_ticket: u64,
}

impl<D: Dom> Page<D> {
    #[must_use]
    pub fn new(dom: D, config: UiConfig) -> Self {
        Self {
            dom,
            config,
            timers: TimerQueue::new(),
            pending_width: None,
            listeners: Vec::new(),
            in_flight: Vec::new(),
            outbox: Vec::new(),
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    // --- Startup ---

    /// Scan the tree once and wire every component. Call exactly once, after
    /// the server-rendered markup is in place.
    pub fn attach(&mut self, now_ms: u64) {
        let flashes = notification_center::attach(self, now_ms);
        let fields = form_guard::attach(self);
        let sortable = table_sorter::attach(self);
        let searches = debounced_search::attach(self);
        let loans = loan_request::attach(self);
        let active = nav_highlighter::attach(self);
        log::debug!(
            "page attached: flashes={flashes} fields={fields} sortable={sortable} searches={searches} loans={loans} active_links={active} listeners={}",
            self.listeners.len()
        );
    }

    pub(crate) fn listen(&mut self, node: D::Node, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener { node, kind, handler });
    }

    /// Registered listeners; a [`ListenerId`] is an index into this slice.
    #[must_use]
    pub fn listeners(&self) -> &[Listener<D::Node>] {
        &self.listeners
    }

    // --- Events ---

    /// Run one listener for an event whose original target is `target`.
    pub fn invoke(&mut self, id: ListenerId, target: &D::Node, now_ms: u64) -> EventOutcome {
        let Some(listener) = self.listeners.get(id) else {
            log::warn!("invoke: unknown listener {id}");
            return EventOutcome::Continue;
        };
        let node = listener.node.clone();
        let handler = listener.handler;
        match handler {
            Handler::FieldFocus => form_guard::on_focus(self, &node),
            Handler::FieldBlur => form_guard::on_blur(self, &node, now_ms),
            Handler::FormSubmit => return form_guard::on_submit(self, &node, now_ms),
            Handler::SortColumn { column } => table_sorter::on_header_click(self, &node, column),
            Handler::RowClick => table_sorter::on_row_click(self, &node, target),
            Handler::SearchInput => debounced_search::on_input(self, &node, now_ms),
            Handler::LoanClick => return loan_request::on_click(self, &node),
        }
        EventOutcome::Continue
    }

    /// Deliver an event the way the DOM would: listeners on the target first,
    /// then on each ancestor for bubbling kinds.
    pub fn dispatch(&mut self, target: &D::Node, kind: EventKind, now_ms: u64) -> EventOutcome {
        let mut outcome = EventOutcome::Continue;
        let mut current = Some(target.clone());
        while let Some(node) = current {
            let ids = self
                .listeners
                .iter()
                .enumerate()
                .filter(|(_, listener)| listener.kind == kind && listener.node == node)
                .map(|(id, _)| id)
                .collect::<Vec<_>>();
            for id in ids {
                outcome = outcome.merge(self.invoke(id, target, now_ms));
            }
            if !kind.bubbles() {
                break;
            }
            current = self.dom.parent(&node);
        }
        outcome
    }

    /// User-initiated submit: dispatch the event, then perform the default
    /// action unless a listener cancelled it. Returns whether the form was
    /// submitted.
    pub fn submit_form(&mut self, form: &D::Node, now_ms: u64) -> bool {
        if self.dispatch(form, EventKind::Submit, now_ms) == EventOutcome::PreventDefault {
            return false;
        }
        self.dom.submit(form);
        true
    }

    /// Viewport resized to `width` pixels.
    pub fn resize(&mut self, width: u32, now_ms: u64) {
        resize_adapter::on_resize(self, width, now_ms);
    }

    /// Post a notification; `None` when the page has no message region.
    pub fn notify(&mut self, text: &str, severity: Severity, now_ms: u64) -> Option<NotificationRecord> {
        notification_center::show(self, text, severity, now_ms)
    }

    // --- Timers ---

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Run every timer due at `now_ms`, including timers those timers
    /// schedule. Each task sees its own deadline as the current time so
    /// chained delays stay exact. Returns how many tasks ran.
    pub fn run_due(&mut self, now_ms: u64) -> usize {
        let mut ran = 0;
        while let Some((due_ms, task)) = self.timers.pop_due(now_ms) {
            match task {
                Task::CloseNotification(node) => notification_center::begin_closing(self, &node, due_ms),
                Task::RemoveNotification(node) => notification_center::retire(self, &node),
                Task::UnlockSubmit(node) => form_guard::unlock(self, &node),
                Task::SearchDebounce(node) => debounced_search::fire(self, &node),
                Task::ResizeDebounce => resize_adapter::apply(self),
            }
            ran += 1;
        }
        ran
    }

    // --- Network ---

    pub(crate) fn issue_request(&mut self, button: D::Node, url: String) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.push(InFlight { ticket, button });
        self.outbox.push(LoanRequest { ticket, url });
        ticket
    }

    /// Requests issued since the last call, for the host to perform.
    pub fn take_requests(&mut self) -> Vec<LoanRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Number of loan requests awaiting completion.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Report the result of a request drained from [`Page::take_requests`].
    pub fn complete_loan(&mut self, ticket: u64, result: Result<(), LoanRequestError>, now_ms: u64) {
        let Some(index) = self.in_flight.iter().position(|pending| pending.ticket == ticket) else {
            log::warn!("loan completion for unknown ticket {ticket}");
            return;
        };
        let pending = self.in_flight.remove(index);
        loan_request::on_complete(self, &pending.button, result, now_ms);
    }
}
