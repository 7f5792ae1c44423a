//! Browser dialog and layout helpers.
//!
//! Calls that need a `window` no-op outside the browser so components can
//! use them unconditionally during SSR.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// CSS `max-height` for a panel body; `None` leaves the stylesheet value.
pub fn max_height_style(max_height: Option<u32>) -> Option<String> {
    max_height.map(|px| format!("{px}px"))
}

/// CSS `display` for a layout wrapper.
pub fn wrapper_display(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

/// Full content height of `element` in px, including overflow.
#[cfg(feature = "hydrate")]
pub fn scroll_height(element: &web_sys::Element) -> u32 {
    u32::try_from(element.scroll_height()).unwrap_or(0)
}
