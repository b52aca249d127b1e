//! Admin system settings: feature toggles, AI model tuning, camera list,
//! and backup status. Nothing here is persisted.

#[cfg(test)]
#[path = "admin_settings_test.rs"]
mod admin_settings_test;

use std::ops::RangeInclusive;

use leptos::prelude::*;

use crate::demo;
use crate::model::NotificationKind;
use crate::state::ui::UiState;

const CONFIDENCE_RANGE: RangeInclusive<u32> = 50..=100;
const PROCESSING_RANGE: RangeInclusive<u32> = 1..=10;

/// System-wide feature switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemToggles {
    pub auto_backup: bool,
    pub ai_monitoring: bool,
    pub email_notifications: bool,
    pub sms_alerts: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self { auto_backup: true, ai_monitoring: true, email_notifications: true, sms_alerts: false }
    }
}

/// Face recognition model tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiModelSettings {
    pub confidence_threshold: u32,
    pub max_processing_secs: u32,
    pub auto_retrain: bool,
}

impl Default for AiModelSettings {
    fn default() -> Self {
        Self { confidence_threshold: 95, max_processing_secs: 5, auto_retrain: true }
    }
}

/// Parse slider input and clamp it into `range`. Unparseable input keeps
/// `previous`.
fn parse_slider(raw: &str, range: &RangeInclusive<u32>, previous: u32) -> u32 {
    raw.trim()
        .parse::<u32>()
        .map_or(previous, |v| v.clamp(*range.start(), *range.end()))
}

fn toggle_row(label: &'static str, hint: &'static str, value: Signal<bool>, on_flip: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="summary-row">
            <div>
                <p>{label}</p>
                <p class="muted">{hint}</p>
            </div>
            <button
                class=move || if value.get() { "toggle toggle--on" } else { "toggle" }
                aria-pressed=move || value.get().to_string()
                on:click=move |_| on_flip()
            ></button>
        </div>
    }
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let system = RwSignal::new(SystemToggles::default());
    let ai = RwSignal::new(AiModelSettings::default());

    let cameras = demo::cameras()
        .into_iter()
        .map(|cam| {
            view! {
                <div class="summary-row">
                    <div>
                        <p>{cam.name}</p>
                        <p class="muted">"Main Entrance"</p>
                    </div>
                    <button class="button">"Configure"</button>
                </div>
            }
        })
        .collect_view();

    let on_save = move |_| {
        leptos::logging::log!("admin settings saved");
        ui.update(|u| {
            u.push_toast(NotificationKind::Success, "Settings saved");
        });
    };

    view! {
        <div class="page settings">
            <div class="page__header">
                <h1>"System Settings"</h1>
                <p class="muted">"Configure system-wide settings and preferences"</p>
            </div>
            <section class="card">
                <h2 class="card__title">"System Configuration"</h2>
                {toggle_row(
                    "Automatic Backup",
                    "Daily backup of all system data",
                    Signal::derive(move || system.with(|s| s.auto_backup)),
                    move || system.update(|s| s.auto_backup = !s.auto_backup),
                )}
                {toggle_row(
                    "AI Monitoring",
                    "Enable AI-powered face recognition",
                    Signal::derive(move || system.with(|s| s.ai_monitoring)),
                    move || system.update(|s| s.ai_monitoring = !s.ai_monitoring),
                )}
                {toggle_row(
                    "Email Notifications",
                    "Send email alerts to administrators",
                    Signal::derive(move || system.with(|s| s.email_notifications)),
                    move || system.update(|s| s.email_notifications = !s.email_notifications),
                )}
                {toggle_row(
                    "SMS Alerts",
                    "Send SMS for critical alerts",
                    Signal::derive(move || system.with(|s| s.sms_alerts)),
                    move || system.update(|s| s.sms_alerts = !s.sms_alerts),
                )}
            </section>
            <section class="card">
                <h2 class="card__title">"AI Model Settings"</h2>
                <label class="field">
                    <span>{move || format!("Confidence Threshold: {}%", ai.with(|a| a.confidence_threshold))}</span>
                    <input
                        type="range"
                        min=CONFIDENCE_RANGE.start().to_string()
                        max=CONFIDENCE_RANGE.end().to_string()
                        prop:value=move || ai.with(|a| a.confidence_threshold.to_string())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            ai.update(|a| {
                                a.confidence_threshold = parse_slider(&raw, &CONFIDENCE_RANGE, a.confidence_threshold);
                            });
                        }
                    />
                    <span class="muted">"Minimum confidence level for face recognition"</span>
                </label>
                <label class="field">
                    <span>{move || format!("Max Processing Time: {}s", ai.with(|a| a.max_processing_secs))}</span>
                    <input
                        type="range"
                        min=PROCESSING_RANGE.start().to_string()
                        max=PROCESSING_RANGE.end().to_string()
                        prop:value=move || ai.with(|a| a.max_processing_secs.to_string())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            ai.update(|a| {
                                a.max_processing_secs = parse_slider(&raw, &PROCESSING_RANGE, a.max_processing_secs);
                            });
                        }
                    />
                    <span class="muted">"Maximum time to process each frame"</span>
                </label>
                {toggle_row(
                    "Auto Retrain",
                    "Automatically improve the model with new data",
                    Signal::derive(move || ai.with(|a| a.auto_retrain)),
                    move || ai.update(|a| a.auto_retrain = !a.auto_retrain),
                )}
            </section>
            <section class="card">
                <h2 class="card__title">"Camera Management"</h2>
                <div class="stack">{cameras}</div>
                <button class="button button--dashed">"+ Add New Camera"</button>
            </section>
            <section class="card">
                <h2 class="card__title">"Database & Backup"</h2>
                <div class="summary-row">
                    <span>"Last Backup"</span>
                    <span class="summary-row__value">"2 hours ago"</span>
                </div>
                <div class="summary-row">
                    <span>"Database Size"</span>
                    <span class="summary-row__value">"2.4 GB"</span>
                </div>
                <div class="filter-bar">
                    <button class="button button--primary">"Backup Now"</button>
                    <button class="button">"Restore"</button>
                </div>
            </section>
            <div class="page__footer">
                <button class="button">"Cancel"</button>
                <button class="button button--primary" on:click=on_save>"Save Changes"</button>
            </div>
        </div>
    }
}
