//! Transient notification records.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use uuid::Uuid;

use crate::consts::{ALERT_CLASS, ATTR_NOTIFICATION_ID, FADE_IN, FADE_OUT};
use crate::dom::Dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Danger,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    /// Styling class, e.g. `alert-danger`.
    #[must_use]
    pub fn class(self) -> String {
        format!("{ALERT_CLASS}-{}", self.as_str())
    }
}

/// Visual phase of a notification element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Open,
    Closing,
}

impl NotificationPhase {
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Open => FADE_IN,
            Self::Closing => FADE_OUT,
        }
    }

    /// Add this phase's marker; earlier markers stay so CSS transitions chain.
    pub fn project<D: Dom>(self, dom: &mut D, element: &D::Node) {
        dom.add_class(element, self.marker());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub text: String,
    pub severity: Severity,
    pub created_at_ms: u64,
}

impl NotificationRecord {
    #[must_use]
    pub fn new(text: &str, severity: Severity, now_ms: u64) -> Self {
        Self { id: Uuid::new_v4(), text: text.to_owned(), severity, created_at_ms: now_ms }
    }

    /// When the closing marker is applied.
    #[must_use]
    pub fn closes_at(&self, display_ms: u64) -> u64 {
        self.created_at_ms.saturating_add(display_ms)
    }

    /// When the element leaves the tree.
    #[must_use]
    pub fn removed_at(&self, display_ms: u64, fade_ms: u64) -> u64 {
        self.closes_at(display_ms).saturating_add(fade_ms)
    }

    /// Build the detached element for this record.
    pub fn render<D: Dom>(&self, dom: &mut D) -> Option<D::Node> {
        let element = dom.create_element("div")?;
        dom.add_class(&element, ALERT_CLASS);
        dom.add_class(&element, &self.severity.class());
        NotificationPhase::Open.project(dom, &element);
        dom.set_attribute(&element, ATTR_NOTIFICATION_ID, &self.id.to_string());
        dom.set_text(&element, &self.text);
        Some(element)
    }
}
