//! Loan request endpoint: `GET {prefix}{book_id}/`.
//!
//! Client-side (hydrate): the request is sent with `gloo-net`.
//! Natively the core only produces [`LoanRequest`]s; whoever drives the page
//! performs them and reports back through `Page::complete_loan`.
//!
//! ERROR HANDLING
//! ==============
//! Only the status is consumed. Non-2xx and transport failures are distinct
//! error variants so logs can tell them apart, but both take the same retry
//! path in the UI.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

use crate::consts::{MSG_CONNECTION_FAILED, MSG_LOAN_FAILED};

/// A request the host must perform, tagged with the ticket it reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanRequest {
    pub ticket: u64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoanRequestError {
    #[error("loan request failed: {0}")]
    Status(u16),
    #[error("loan request transport failure: {0}")]
    Transport(String),
}

impl LoanRequestError {
    /// Text shown to the user in the danger notification.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Status(_) => MSG_LOAN_FAILED,
            Self::Transport(_) => MSG_CONNECTION_FAILED,
        }
    }
}

/// Book ids are opaque but must stay inside a single path segment.
fn is_valid_book_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Build the request URL, or `None` for an id that would escape its segment.
#[must_use]
pub fn request_url(prefix: &str, book_id: &str) -> Option<String> {
    let id = book_id.trim();
    if !is_valid_book_id(id) {
        return None;
    }
    let prefix = prefix.trim_end_matches('/');
    Some(format!("{prefix}/{id}/"))
}

/// 2xx is success; everything else is a failed request.
///
/// # Errors
///
/// [`LoanRequestError::Status`] for any non-2xx status.
pub fn classify_status(status: u16) -> Result<(), LoanRequestError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(LoanRequestError::Status(status)) }
}

/// Perform the request.
///
/// # Errors
///
/// [`LoanRequestError::Transport`] if the fetch itself fails,
/// [`LoanRequestError::Status`] for a non-2xx response.
#[cfg(feature = "hydrate")]
pub async fn send(url: &str) -> Result<(), LoanRequestError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoanRequestError::Transport(e.to_string()))?;
    classify_status(resp.status())
}
