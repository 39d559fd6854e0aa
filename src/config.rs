//! Timings, breakpoint and endpoint configuration.
//!
//! Defaults match what the catalog templates were styled against. Pages can
//! override any field with a JSON blob in `<body data-ui-config="...">`; the
//! browser bridge parses it with [`UiConfig::from_json`] and falls back to the
//! defaults when the blob is malformed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 5_000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u64 = 300;
pub const DEFAULT_SUBMIT_LOCK_MS: u64 = 2_000;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
pub const DEFAULT_LOAN_ENDPOINT_PREFIX: &str = "/prestamos/solicitar/";
pub const DEFAULT_MESSAGE_REGION: &str = "container";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid ui config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct UiConfig {
    /// How long a notification stays before it starts closing.
    pub notification_display_ms: u64,
    /// Closing animation length before the element is detached.
    pub notification_fade_ms: u64,
    /// Safety valve releasing a locked submit control.
    pub submit_lock_ms: u64,
    pub search_debounce_ms: u64,
    pub resize_debounce_ms: u64,
    /// Viewports narrower than this drop fixed card heights.
    pub mobile_breakpoint_px: u32,
    pub loan_endpoint_prefix: String,
    /// Class name of the container notifications are inserted into.
    pub message_region: String,
    /// Post a danger notification when a field turns invalid on blur.
    pub notify_on_invalid: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            notification_fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
            submit_lock_ms: DEFAULT_SUBMIT_LOCK_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            loan_endpoint_prefix: DEFAULT_LOAN_ENDPOINT_PREFIX.to_owned(),
            message_region: DEFAULT_MESSAGE_REGION.to_owned(),
            notify_on_invalid: false,
        }
    }
}

impl UiConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value fails [`UiConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a timer fire immediately or disable the
    /// responsive breakpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("notificationDisplayMs", self.notification_display_ms),
            ("notificationFadeMs", self.notification_fade_ms),
            ("submitLockMs", self.submit_lock_ms),
            ("searchDebounceMs", self.search_debounce_ms),
            ("resizeDebounceMs", self.resize_debounce_ms),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid { field: *field, reason: "must be greater than zero" });
        }
        if self.mobile_breakpoint_px == 0 {
            return Err(ConfigError::Invalid { field: "mobileBreakpointPx", reason: "must be greater than zero" });
        }
        if !self.loan_endpoint_prefix.starts_with('/') {
            return Err(ConfigError::Invalid { field: "loanEndpointPrefix", reason: "must be an absolute path" });
        }
        if self.message_region.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "messageRegion", reason: "must not be empty" });
        }
        Ok(())
    }
}
