//! Wellness hub card on the employee dashboard.

use leptos::prelude::*;

use crate::state::wellness::{HUB_METRICS, Mood, hub_average};
use crate::util::classify::wellness_level;
use crate::util::random_walk::whole_percent;

#[component]
pub fn WellnessCheck() -> impl IntoView {
    let mood = RwSignal::new(Mood::Neutral);
    let level = wellness_level(hub_average(&HUB_METRICS));

    let metrics = HUB_METRICS
        .iter()
        .map(|m| {
            let pct = whole_percent(m.value);
            view! {
                <div class="wellness-metric">
                    <div class="wellness-metric__head">
                        <span>{m.icon} " " {m.label}</span>
                        <span>{format!("{pct}%")}</span>
                    </div>
                    <div class="bar">
                        <div class="bar__fill" style=format!("width: {pct}%;")></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let moods = Mood::ALL
        .into_iter()
        .map(|m| {
            let class = move || if mood.get() == m { "mood-button mood-button--active" } else { "mood-button" };
            view! {
                <button class=class on:click=move |_| mood.set(m)>
                    <span>{m.emoji()}</span>
                    <span>{m.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="card wellness-hub">
            <div class="wellness-hub__head">
                <h3 class="card__title">"Wellness Hub"</h3>
                <span class=level.class()>{level.label()}</span>
            </div>
            <div class="wellness-hub__metrics">{metrics}</div>
            <p class="wellness-hub__prompt">"How are you feeling today?"</p>
            <div class="wellness-hub__moods">{moods}</div>
            <div class="wellness-hub__actions">
                <button class="button">"Take a Break"</button>
                <button class="button">"Breathing Exercise"</button>
            </div>
        </section>
    }
}
