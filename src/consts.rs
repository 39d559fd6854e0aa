//! Marker, selector and label vocabulary shared by the components.
//!
//! The server templates style these class names, so they are part of the
//! page contract rather than free choices.

// --- Markers ---

/// Field currently holds focus.
pub const FOCUSED: &str = "focused";
/// Required field failed validation on blur or submit.
pub const INVALID: &str = "is-invalid";
/// Navigation link pointing at the current path.
pub const ACTIVE: &str = "active";
/// Header sorted ascending.
pub const SORT_ASC: &str = "asc";
/// Header sorted descending.
pub const SORT_DESC: &str = "desc";
/// Header opted out of sorting.
pub const NO_SORT: &str = "no-sort";
/// Loan button waiting on its request.
pub const PROCESSING: &str = "processing";
/// Notification entering.
pub const FADE_IN: &str = "fade-in";
/// Notification closing.
pub const FADE_OUT: &str = "fade-out";

// --- Attributes ---

pub const ATTR_ORIGINAL_LABEL: &str = "data-original-label";
pub const ATTR_LOAN_STATE: &str = "data-loan-state";
pub const ATTR_BOOK_ID: &str = "data-libro-id";
pub const ATTR_NOTIFICATION_ID: &str = "data-notification-id";
pub const ATTR_UI_CONFIG: &str = "data-ui-config";

/// Collation locale when `<html lang>` is missing.
pub const DEFAULT_COLLATION_LOCALE: &str = "es";

// --- Target classes ---

pub const TABLE_CLASS: &str = "table";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const LOAN_BUTTON_CLASS: &str = "btn-prestamo";
pub const CARD_CLASS: &str = "card";
pub const FLASH_REGION_CLASS: &str = "messages";
pub const ALERT_CLASS: &str = "alert";

// --- Labels ---

pub const LABEL_SUBMITTING: &str = "Procesando...";
pub const LABEL_LOAN_PENDING: &str = "Solicitando...";
pub const LABEL_LOAN_REQUESTED: &str = "Solicitado";

pub const MSG_FIELD_REQUIRED: &str = "Este campo es obligatorio";
pub const MSG_LOAN_SENT: &str = "Solicitud de préstamo enviada correctamente";
pub const MSG_LOAN_FAILED: &str = "Error al solicitar el préstamo";
pub const MSG_CONNECTION_FAILED: &str = "Error de conexión";

/// Inline styles the resize adapter strips from cards on narrow viewports.
pub const CARD_HEIGHT_STYLES: [&str; 2] = ["height", "min-height"];
