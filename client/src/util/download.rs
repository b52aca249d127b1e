//! Browser file download for exported data.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Offer `contents` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns a description of the failing browser call. Always fails outside
/// the browser.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let describe = |e: JsValue| format!("{e:?}");
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
        with_object_url(
            || web_sys::Url::create_object_url_with_blob(&blob).map_err(describe),
            |url| {
                let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
                let anchor = document
                    .create_element("a")
                    .map_err(describe)?
                    .dyn_into::<web_sys::HtmlAnchorElement>()
                    .map_err(|_| "anchor cast failed".to_owned())?;
                anchor.set_href(url);
                anchor.set_download(filename);
                anchor.click();
                Ok(())
            },
            |url| {
                let _ = web_sys::Url::revoke_object_url(url);
            },
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        Err("downloads require a browser".to_owned())
    }
}

/// Create an object URL, hand it to `use_url`, and revoke it whether or not
/// `use_url` succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn with_object_url<T, E>(
    create: impl FnOnce() -> Result<String, E>,
    use_url: impl FnOnce(&str) -> Result<T, E>,
    revoke: impl FnOnce(&str),
) -> Result<T, E> {
    let url = create()?;
    let outcome = use_url(&url);
    revoke(&url);
    outcome
}
