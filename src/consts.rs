//! Fixed identifiers shared by the controller and the browser binding.

// ── DOM ─────────────────────────────────────────────────────────

/// Id of the toggle control the page is expected to render.
pub const DEFAULT_ELEMENT_ID: &str = "theme-switcher";

/// `name` of the optional `<meta>` tag carrying a JSON [`crate::config::ToggleConfig`].
pub const CONFIG_META_NAME: &str = "theme-switcher";

/// DOM event that triggers initialization.
pub const CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";

/// DOM event bound on the control.
pub const CLICK_EVENT: &str = "click";

// ── Storage ─────────────────────────────────────────────────────

/// Storage key holding the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "mode";

/// Stored literal for an enabled preference. Only this exact string counts as enabled.
pub const STORED_TRUE: &str = "true";

/// Stored literal written when the control is unchecked.
pub const STORED_FALSE: &str = "false";

// ── Logging ─────────────────────────────────────────────────────

pub const DEFAULT_LOG_LEVEL: &str = "warn";
