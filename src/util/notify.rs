//! Blocking user-facing notifications.
//!
//! Validation failures surface through `window.alert`, which suspends the
//! event handler until dismissed. Requires a browser environment.

/// Show a blocking alert dialog with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
