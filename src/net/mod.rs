//! Networking for the enhancement layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only endpoint consumed is the loan request URL. `loan` builds it,
//! classifies responses, and (with `hydrate`) performs the request via
//! `gloo-net`.

pub mod loan;
