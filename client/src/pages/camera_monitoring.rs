//! Admin grid of all camera feeds.

use leptos::prelude::*;

use crate::components::camera_feed::CameraFeed;
use crate::demo;

#[component]
pub fn CameraMonitoringPage() -> impl IntoView {
    let feeds = demo::cameras()
        .into_iter()
        .map(|camera| view! { <CameraFeed camera=camera show_overlay=true /> })
        .collect_view();

    view! {
        <div class="page camera-monitoring">
            <div class="page__header">
                <h1>"Camera Monitoring"</h1>
                <p class="muted">"Live feeds from all cameras with AI face detection"</p>
            </div>
            <div class="camera-grid">{feeds}</div>
        </div>
    }
}
