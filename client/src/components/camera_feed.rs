//! One camera card: media capture, simulated detections, and controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card owns its `CameraFeedState` and, in the browser, the captured
//! `MediaStream`. Starting requests the camera asynchronously; the result is
//! applied only if the card is still waiting for it, so a stop pressed while
//! the permission prompt is open wins. Tracks are released on stop, restart,
//! and unmount.
//!
//! TRADE-OFFS
//! ==========
//! Detection boxes are simulated: every tick redraws a person count with no
//! relation to the captured frames.

#[cfg(test)]
#[path = "camera_feed_test.rs"]
mod camera_feed_test;

use std::time::Duration;

use leptos::prelude::*;

#[cfg_attr(not(feature = "hydrate"), allow(unused_imports))]
use crate::model::{Camera, NotificationKind};
use crate::state::camera::{CameraFeedState, MAX_FEED_DETECTIONS};
use crate::state::ui::UiState;
use crate::util::classify::people_label;
use crate::util::ticker::use_ticker;
use crate::util::{clock, media, random_walk};

const DETECTION_PERIOD: Duration = Duration::from_secs(2);

/// Size of a simulated detection box, in percent of the frame.
const BOX_WIDTH_PCT: u32 = 18;
const BOX_HEIGHT_PCT: u32 = 30;

/// Position of the `index`th simulated detection box, in percent of the
/// frame. Boxes cascade down and right and are pinned to the frame edge
/// once the cascade would run past it.
fn overlay_offset(index: u32) -> (u32, u32) {
    let left = (20 + index * 25).min(100 - BOX_WIDTH_PCT);
    let top = (30 + index * 10).min(100 - BOX_HEIGHT_PCT);
    (left, top)
}

#[component]
pub fn CameraFeed(camera: Camera, #[prop(default = true)] show_overlay: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = RwSignal::new(CameraFeedState::default());
    let now = RwSignal::new(clock::PLACEHOLDER_TIME.to_owned());
    let video_ref = NodeRef::<leptos::html::Video>::new();
    #[cfg(feature = "hydrate")]
    let stream_slot = StoredValue::new_local(None::<web_sys::MediaStream>);

    let mut rng = random_walk::view_rng();
    use_ticker(DETECTION_PERIOD, move || {
        let count = random_walk::redraw_count(&mut rng, MAX_FEED_DETECTIONS);
        feed.update(|f| f.set_detections(count));
        now.set(clock::time_label());
    });

    let release = move || {
        #[cfg(feature = "hydrate")]
        {
            stream_slot.try_update_value(|slot| {
                if let Some(stream) = slot.take() {
                    media::stop_tracks(&stream);
                }
            });
            if let Some(video) = video_ref.get_untracked() {
                video.set_src_object(None);
            }
        }
    };

    let camera_id = camera.id.clone();
    let start = move || {
        if !feed.try_update(CameraFeedState::start).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let camera_id = camera_id.clone();
            leptos::task::spawn_local(async move {
                match media::request_camera().await {
                    Ok(stream) => {
                        if feed.try_update(CameraFeedState::acquired).unwrap_or(false) {
                            if let Some(video) = video_ref.get_untracked() {
                                video.set_src_object(Some(&stream));
                            }
                            stream_slot.set_value(Some(stream));
                        } else {
                            media::stop_tracks(&stream);
                        }
                    }
                    Err(err) => {
                        leptos::logging::warn!("camera {camera_id}: {err}");
                        feed.update(|f| f.failed(err.to_string()));
                        ui.update(|u| {
                            u.push_toast(NotificationKind::Error, media::CAMERA_FAILURE_TOAST);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&camera_id, ui);
        }
    };
    let start = StoredValue::new(start);
    let stop = move || {
        release();
        feed.update(CameraFeedState::stop);
    };

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        stream_slot.try_update_value(|slot| {
            if let Some(stream) = slot.take() {
                media::stop_tracks(&stream);
            }
        });
    });

    let is_live = move || feed.with(CameraFeedState::is_live);
    let detections = move || feed.with(CameraFeedState::detections);

    let controls = move || {
        if is_live() {
            view! {
                <button class="icon-button icon-button--danger" title="Stop feed" on:click=move |_| stop()>
                    "■"
                </button>
                <button
                    class="icon-button"
                    title="Restart feed"
                    on:click=move |_| {
                        stop();
                        start.with_value(|f| f());
                    }
                >
                    "↻"
                </button>
            }
            .into_any()
        } else {
            let starting = move || feed.with(|f| *f == CameraFeedState::Starting);
            view! {
                <button class="button button--primary" disabled=starting on:click=move |_| start.with_value(|f| f())>
                    "Start Feed"
                </button>
            }
            .into_any()
        }
    };

    let placeholder = move || {
        feed.with(|f| match f {
            CameraFeedState::Live { .. } => None,
            CameraFeedState::Starting => Some(("Connecting...".to_owned(), "Waiting for camera permission".to_owned())),
            CameraFeedState::Failed { reason } => Some(("Camera Unavailable".to_owned(), reason.clone())),
            CameraFeedState::Offline => {
                Some(("Camera Offline".to_owned(), "Click \"Start Feed\" to activate".to_owned()))
            }
        })
        .map(|(title, hint)| {
            view! {
                <div class="camera-feed__placeholder">
                    <span class="camera-feed__placeholder-icon">"⊘"</span>
                    <p class="camera-feed__placeholder-title">{title}</p>
                    <p class="camera-feed__placeholder-hint">{hint}</p>
                </div>
            }
        })
    };

    let boxes = move || {
        if !show_overlay || !is_live() {
            return Vec::new();
        }
        (0..detections())
            .map(|i| {
                let (left, top) = overlay_offset(i);
                view! {
                    <div class="camera-feed__box" style=format!(
                            "left: {left}%; top: {top}%; width: {BOX_WIDTH_PCT}%; height: {BOX_HEIGHT_PCT}%;"
                        )>
                        <span class="camera-feed__box-label">{format!("Person {} • 98%", i + 1)}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="card camera-feed">
            <div class="camera-feed__head">
                <div class="camera-feed__title">
                    <span class="camera-feed__icon">"📷"</span>
                    <div>
                        <h3>{camera.name}</h3>
                        <p class="muted">"ID: " {camera.id}</p>
                    </div>
                </div>
                <div class="camera-feed__controls">
                    <Show when=move || show_overlay && is_live()>
                        <span class="camera-feed__people">
                            <span class="pulse-dot"></span>
                            {move || people_label(detections())}
                        </span>
                    </Show>
                    {controls}
                </div>
            </div>
            <div class="camera-feed__view">
                <video
                    node_ref=video_ref
                    class="camera-feed__video"
                    class:hidden=move || !is_live()
                    prop:autoplay=true
                    prop:muted=true
                ></video>
                {placeholder}
                <div class="camera-feed__overlay">{boxes}</div>
                <Show when=is_live>
                    <div class="camera-feed__clock">{move || now.get()}</div>
                </Show>
            </div>
            <Show when=is_live>
                <div class="camera-feed__stats">
                    <div>
                        <p class="stat__value">{detections}</p>
                        <p class="stat__label">"Detected"</p>
                    </div>
                    <div>
                        <p class="stat__value text-success">"97.8%"</p>
                        <p class="stat__label">"Accuracy"</p>
                    </div>
                    <div>
                        <p class="stat__value">"24fps"</p>
                        <p class="stat__label">"Frame Rate"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
