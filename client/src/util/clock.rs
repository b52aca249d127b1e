//! Wall-clock labels for overlays and "last seen" fields.
//!
//! Server renders have no meaningful local time, so they show a placeholder
//! that the hydrated view replaces on its first tick.

pub const PLACEHOLDER_TIME: &str = "--:--:--";

/// Local time of day, e.g. `10:30:15 AM`.
pub fn time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PLACEHOLDER_TIME.to_owned()
    }
}

/// Local date and time, e.g. `1/15/2024, 10:30:15 AM`.
pub fn date_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PLACEHOLDER_TIME.to_owned()
    }
}

/// Long local date for the navbar, e.g. `Monday, January 15, 2024`.
pub fn long_date_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let options = js_sys::Object::new();
        for (key, value) in [("weekday", "long"), ("year", "numeric"), ("month", "long"), ("day", "numeric")] {
            let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
        }
        String::from(js_sys::Date::new_0().to_locale_date_string("en-US", &options))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
