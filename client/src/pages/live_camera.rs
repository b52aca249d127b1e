//! Single-user live camera view with simulated face recognition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Detection readings are drawn every three seconds while streaming and
//! applied to `LiveCameraState`. Connection changes (start, or a simulated
//! drop) recover one step every two seconds until connected again. Both
//! loops stop with the page.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::camera::{CameraQuality, ConnectionStatus, DetectionRoll, LiveCameraState};
use crate::util::classify::{connection_class, connection_text, detection_class, detection_text};
use crate::util::ticker::use_ticker;
use crate::util::{clock, random_walk};

const DETECTION_PERIOD: Duration = Duration::from_secs(3);
const RECOVERY_PERIOD: Duration = Duration::from_secs(2);

const TIMELINE: [(&str, &str, &str); 5] = [
    ("10:30 AM", "Face detected - Employee check-in", "success"),
    ("11:15 AM", "Face temporarily lost - brief movement", "warning"),
    ("11:17 AM", "Face re-detected - returned to position", "success"),
    ("12:00 PM", "Multiple faces detected - meeting in progress", "info"),
    ("12:30 PM", "Face detection stable - focused work", "success"),
];

#[component]
pub fn LiveCameraPage() -> impl IntoView {
    let cam = RwSignal::new(LiveCameraState::default());

    let mut rng = random_walk::view_rng();
    use_ticker(DETECTION_PERIOD, move || {
        if !cam.with_untracked(|c| c.streaming) {
            return;
        }
        let roll = DetectionRoll::draw(&mut rng);
        let now = clock::time_label();
        let dropped = cam.try_update(|c| c.apply(roll, &now)).unwrap_or(false);
        if dropped {
            leptos::logging::warn!("live camera: connection dropped");
        }
    });
    use_ticker(RECOVERY_PERIOD, move || {
        let pending = cam.with_untracked(|c| c.streaming && c.connection != ConnectionStatus::Connected);
        if pending {
            cam.update(LiveCameraState::recover_connection);
        }
    });

    let streaming = move || cam.with(|c| c.streaming);
    let face = move || cam.with(LiveCameraState::face_detected);
    let confidence = move || cam.with(|c| c.confidence);
    let quality = move || cam.with(|c| c.quality);

    let quality_options = CameraQuality::ALL
        .into_iter()
        .map(|q| view! { <option value=q.key()>{q.option_label()}</option> })
        .collect_view();

    let timeline = TIMELINE
        .iter()
        .map(|(time, event, kind)| {
            view! {
                <li class="timeline__item">
                    <span class=format!("timeline__dot timeline__dot--{kind}")></span>
                    <div>
                        <p>{*event}</p>
                        <p class="muted">{*time}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    let feed_view = move || {
        if streaming() {
            view! {
                <div class="live-feed live-feed--active">
                    <div class="live-feed__center">
                        <span class="live-feed__icon">"📷"</span>
                        <p class="live-feed__title">"Live Camera Feed Active"</p>
                        <p>{move || format!("AI Face Recognition: {}", quality().key())}</p>
                        <div class="live-feed__indicators">
                            <span>"● REC"</span>
                            <span>"Connected"</span>
                            <span>"AI Active"</span>
                        </div>
                    </div>
                    <Show when=face>
                        <div class="live-feed__face">
                            <span class="live-feed__face-label">"Face Detected"</span>
                            <span class="live-feed__confidence">{move || format!("Confidence: {}%", confidence())}</span>
                        </div>
                    </Show>
                    <div class="live-feed__processing">"AI Processing..."</div>
                    <div class="live-feed__status">
                        <span>{move || if face() { "Face Detected" } else { "No Face" }}</span>
                        <span>{move || format!("AI: {}%", confidence())}</span>
                        <span>{move || quality().key()}</span>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="live-feed">
                    <div class="live-feed__center muted">
                        <span class="live-feed__icon">"📷"</span>
                        <p>"Camera Offline"</p>
                        <p>"Click \"Start Stream\" to begin monitoring"</p>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    let alerts = move || {
        cam.with(|c| {
            if c.alerts.is_empty() {
                view! { <p class="muted alerts__empty">"No alerts at this time"</p> }.into_any()
            } else {
                c.alerts
                    .iter()
                    .map(|a| view! { <div class="alert">"⚠ " {a.clone()}</div> })
                    .collect_view()
                    .into_any()
            }
        })
    };

    view! {
        <div class="page live-camera">
            <div class="page__header page__header--split">
                <div>
                    <h1>"Live Camera Feed"</h1>
                    <p class="muted">"AI-powered face recognition and monitoring"</p>
                </div>
                <div class="live-camera__actions">
                    <span class=move || cam.with(|c| connection_class(c.connection))>
                        {move || cam.with(|c| connection_text(c.connection))}
                    </span>
                    <button
                        class=move || if streaming() { "button button--danger" } else { "button button--success" }
                        on:click=move |_| cam.update(LiveCameraState::toggle_streaming)
                    >
                        {move || if streaming() { "■ Stop Stream" } else { "▶ Start Stream" }}
                    </button>
                </div>
            </div>
            <div class="split">
                <div class="split__main stack">
                    <section class="card">
                        <div class="card__head">
                            <h2 class="card__title">"Camera Feed - Main Entrance"</h2>
                            <select
                                class="input"
                                prop:value=move || quality().key()
                                on:change=move |ev| {
                                    let q = CameraQuality::from_key(&event_target_value(&ev));
                                    cam.update(|c| c.quality = q);
                                }
                            >
                                {quality_options}
                            </select>
                        </div>
                        {feed_view}
                    </section>
                    <section class="card">
                        <h3 class="card__title">"Detection Timeline"</h3>
                        <ul class="timeline">{timeline}</ul>
                    </section>
                </div>
                <div class="stack">
                    <section class="card">
                        <h3 class="card__title">"Face Recognition"</h3>
                        <div class=move || cam.with(|c| detection_class(c.detection))>
                            <span>"Status"</span>
                            <strong>{move || cam.with(|c| detection_text(c.detection))}</strong>
                            <Show when=face>
                                <p class="muted">{move || format!("Confidence: {}%", confidence())}</p>
                            </Show>
                        </div>
                        <div class="summary-row">
                            <span>"Last Seen"</span>
                            <span>{move || cam.with(|c| c.last_seen.clone().unwrap_or_else(|| "Never".to_owned()))}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Camera Quality"</span>
                            <span>{move || quality().key()}</span>
                        </div>
                    </section>
                    <section class="card">
                        <h3 class="card__title">"System Alerts"</h3>
                        <div class="alerts">{alerts}</div>
                    </section>
                    <section class="card">
                        <h3 class="card__title">"Camera Settings"</h3>
                        <div class="summary-row"><span>"Auto-focus"</span><span class="toggle toggle--on"></span></div>
                        <div class="summary-row"><span>"Face tracking"</span><span class="toggle toggle--on"></span></div>
                        <div class="summary-row"><span>"Motion detection"</span><span class="toggle toggle--on"></span></div>
                        <button class="button button--primary">"Advanced Settings"</button>
                    </section>
                </div>
            </div>
        </div>
    }
}
