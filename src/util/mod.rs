//! Pure helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches the tree; components read text out of the `Dom` and
//! hand plain strings to these functions so the rules can be tested in
//! isolation.

pub mod collate;
pub mod nav;
