//! Persisted light/dark theme flag.
//!
//! The theme lives in `localStorage` under a single key holding `"dark"` or
//! `"light"`, and is applied as a `data-theme` attribute on `<html>`.
//! Anything other than `"dark"` (including a missing key) means light.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; storage failures are
//! ignored and SSR paths no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "monitorai_theme";

/// Interpret a stored theme value.
pub fn parse_preference(stored: Option<&str>) -> bool {
    stored == Some("dark")
}

/// Value written back to storage for a theme.
pub fn theme_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the stored preference. Light when nothing is stored or outside the
/// browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        parse_preference(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_value(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Apply and persist a theme choice.
pub fn set(dark: bool) {
    apply(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme_value(dark));
        }
    }
}

/// Flip the theme, persist it, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    set(next);
    next
}
