//! Blocking Browser Dialogs
//!
//! Thin wrappers over the native `alert`/`confirm`/`prompt` dialogs. A missing
//! window or a JS-side error is treated as the user declining.

/// Show a blocking message dialog
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for confirmation; `false` when declined
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask for free text; `None` when cancelled
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
}
