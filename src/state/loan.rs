//! Loan request lifecycle for a single "request loan" button.
//!
//! ```text
//! Idle --click--> Processing --2xx--> Success (terminal)
//!                     |
//!                     +--non-2xx / transport--> Error --click--> Processing
//! ```
//!
//! The state is stored in `data-loan-state` on the button. The click guard
//! lives here rather than in the disabled attribute: a `Processing` button
//! refuses to start a second request even if something re-enabled it.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

use std::fmt;

use crate::consts::{ATTR_LOAN_STATE, LABEL_LOAN_PENDING, LABEL_LOAN_REQUESTED, PROCESSING};
use crate::dom::Dom;
use crate::state::label;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoanRequestState {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot start a loan request while {0}")]
    Busy(LoanRequestState),
    #[error("no loan request in flight (state {0})")]
    NotInFlight(LoanRequestState),
}

impl LoanRequestState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "idle" => Some(Self::Idle),
            "processing" => Some(Self::Processing),
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Read from `data-loan-state`; unmarked buttons are idle.
    pub fn read<D: Dom>(dom: &D, button: &D::Node) -> Self {
        dom.attribute(button, ATTR_LOAN_STATE)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Whether a click may issue a request.
    #[must_use]
    pub fn accepts_click(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Success
    }

    /// `Idle | Error -> Processing`.
    ///
    /// # Errors
    ///
    /// [`TransitionError::Busy`] while a request is in flight or after success.
    pub fn begin(self) -> Result<Self, TransitionError> {
        if self.accepts_click() { Ok(Self::Processing) } else { Err(TransitionError::Busy(self)) }
    }

    /// `Processing -> Success | Error`.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotInFlight`] if no request was started.
    pub fn complete(self, ok: bool) -> Result<Self, TransitionError> {
        match (self, ok) {
            (Self::Processing, true) => Ok(Self::Success),
            (Self::Processing, false) => Ok(Self::Error),
            (other, _) => Err(TransitionError::NotInFlight(other)),
        }
    }

    /// Mirror onto the button: state attribute, `processing` marker,
    /// disabled flag and label, in that order.
    pub fn project<D: Dom>(self, dom: &mut D, button: &D::Node) {
        dom.set_attribute(button, ATTR_LOAN_STATE, self.as_str());
        match self {
            Self::Processing => {
                dom.add_class(button, PROCESSING);
                label::replace(dom, button, LABEL_LOAN_PENDING);
            }
            Self::Success => {
                dom.remove_class(button, PROCESSING);
                dom.set_disabled(button, true);
                label::capture(dom, button);
                dom.set_text(button, LABEL_LOAN_REQUESTED);
            }
            Self::Idle | Self::Error => {
                dom.remove_class(button, PROCESSING);
                dom.set_disabled(button, false);
                label::restore(dom, button);
            }
        }
    }
}

impl fmt::Display for LoanRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
