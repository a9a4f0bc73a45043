pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod geo;
pub mod icons;
pub mod nav_state;

/// Blocking notification, used for authorization refusals.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
