//! # biblioteca-ui
//!
//! Progressive-enhancement layer for the server-rendered library catalog.
//! Pages arrive fully rendered; this crate attaches behavior to the existing
//! tree: form feedback and submit locking, sortable tables, debounced search,
//! asynchronous loan requests, transient notifications and a couple of
//! cosmetic adapters.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Testable core: listener table, event dispatch, timers, in-flight requests |
//! | [`components`] | One module per behavior, each with an `attach` scan and handlers |
//! | [`dom`] | The `Dom` seam plus the in-memory tree used by tests and native hosts |
//! | [`state`] | Per-concern state enums, projected onto element markers |
//! | [`timers`] | Keyed virtual-time timer queue |
//! | [`net`] | Loan request endpoint and its error type |
//! | [`util`] | Pure helpers (collation, path matching) |
//! | [`config`] | Timings, breakpoint and endpoint configuration |
//! | [`consts`] | Marker, selector and label vocabulary |
//!
//! The browser bridge (`browser`) is only compiled with the `hydrate`
//! feature; everything else builds and tests natively.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;
pub mod config;
pub mod consts;
pub mod dom;
pub mod net;
pub mod page;
pub mod state;
pub mod timers;
pub mod util;

pub use config::UiConfig;
pub use dom::{Dom, MemoryDom, NodeId, Selector};
pub use page::{EventKind, EventOutcome, Page};
