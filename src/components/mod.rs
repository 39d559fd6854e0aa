//! Behaviors attached to the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module exposes an `attach` scan, run once by `Page::attach`, plus the
//! handlers the page routes events and timers to. Components never call each
//! other; the notification center is the one shared dependency, used by the
//! form guard and the loan controller.

pub mod debounced_search;
pub mod form_guard;
pub mod loan_request;
pub mod nav_highlighter;
pub mod notification_center;
pub mod resize_adapter;
pub mod table_sorter;
