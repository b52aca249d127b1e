//! Browser camera access through `getUserMedia`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Camera feed cards request a 1280x720 video stream, attach it to their
//! `<video>` element, and stop every track when the feed stops, restarts,
//! or unmounts. Outside the browser every request fails with
//! `MediaError::Unsupported`.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use thiserror::Error;

pub const VIDEO_WIDTH: u32 = 1280;
pub const VIDEO_HEIGHT: u32 = 720;

/// Toast text shown for any acquisition failure.
pub const CAMERA_FAILURE_TOAST: &str = "Failed to access camera";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no camera device available")]
    NoDevice,
    #[error("media devices are not available in this environment")]
    Unsupported,
    #[error("camera error: {0}")]
    Other(String),
}

impl MediaError {
    /// Map a `DOMException` name (and message) from `getUserMedia`.
    pub fn from_dom_name(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" => Self::PermissionDenied,
            "NotFoundError" | "OverconstrainedError" | "NotReadableError" => Self::NoDevice,
            _ if message.is_empty() => Self::Other(name.to_owned()),
            _ => Self::Other(format!("{name}: {message}")),
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{MediaError, VIDEO_HEIGHT, VIDEO_WIDTH};
    use wasm_bindgen::{JsCast, JsValue};

    fn from_js(err: &JsValue) -> MediaError {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(dom) => MediaError::from_dom_name(&dom.name(), &dom.message()),
            None => MediaError::Other(format!("{err:?}")),
        }
    }

    pub async fn request_camera() -> Result<web_sys::MediaStream, MediaError> {
        let window = web_sys::window().ok_or(MediaError::Unsupported)?;
        let devices = window.navigator().media_devices().map_err(|_| MediaError::Unsupported)?;

        let video = js_sys::Object::new();
        js_sys::Reflect::set(&video, &"width".into(), &JsValue::from(VIDEO_WIDTH)).map_err(|e| from_js(&e))?;
        js_sys::Reflect::set(&video, &"height".into(), &JsValue::from(VIDEO_HEIGHT)).map_err(|e| from_js(&e))?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_video(&video);

        let promise = devices.get_user_media_with_constraints(&constraints).map_err(|e| from_js(&e))?;
        let stream = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(|e| from_js(&e))?;
        stream
            .dyn_into::<web_sys::MediaStream>()
            .map_err(|_| MediaError::Other("getUserMedia returned a non-stream value".to_owned()))
    }

    pub fn stop_tracks(stream: &web_sys::MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{request_camera, stop_tracks};
