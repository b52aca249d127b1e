//! Row of system health tiles on the admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are fixed demo metrics; the bar only maps each metric status to
//! its color classes.

use leptos::prelude::*;

use crate::model::SystemMetric;
use crate::util::classify::{metric_status_bg, metric_status_class};

#[component]
pub fn SystemStatusBar(metrics: Vec<SystemMetric>) -> impl IntoView {
    let tiles = metrics
        .into_iter()
        .map(|m| {
            view! {
                <div class="status-tile">
                    <span class=format!("status-tile__dot {}", metric_status_bg(m.status))></span>
                    <div>
                        <p class="status-tile__label">{m.label}</p>
                        <p class=format!("status-tile__value {}", metric_status_class(m.status))>{m.value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="system-status-bar">{tiles}</div> }
}
