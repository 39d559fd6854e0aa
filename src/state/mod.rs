//! Per-concern state enums.
//!
//! DESIGN
//! ======
//! No component keeps a registry of the elements it enhances. Each state type
//! here is read from the element's markers, advanced, and projected back onto
//! the element, so state lives exactly as long as the element does. The enum
//! decides; the classes and attributes only reflect the decision.

pub mod field;
pub mod label;
pub mod loan;
pub mod notification;
pub mod sort;
