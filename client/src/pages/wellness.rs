//! Employee wellness center.
//!
//! SYSTEM CONTEXT
//! ==============
//! The four gauges start from fixed values and random-walk every five
//! seconds while the page is mounted. Overall level and the suggestion are
//! derived from the current gauges on every tick.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::wellness::{Mood, WellnessGauges};
use crate::util::random_walk::{self, whole_percent};
use crate::util::ticker::use_ticker;
use crate::util::clock;

const GAUGE_PERIOD: Duration = Duration::from_secs(5);

fn gauge_card(label: &'static str, icon: &'static str, value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{icon} " " {label}</p>
            <p class="stat-card__value">{move || format!("{}%", whole_percent(value.get()))}</p>
            <div class="bar">
                <div class="bar__fill" style=move || format!("width: {}%;", whole_percent(value.get()))></div>
            </div>
        </div>
    }
}

#[component]
pub fn WellnessPage() -> impl IntoView {
    let mood = RwSignal::new(Mood::Happy);
    let gauges = RwSignal::new(WellnessGauges::default());
    let last_check = RwSignal::new(String::new());
    Effect::new(move |_| last_check.set(clock::date_time_label()));

    let mut rng = random_walk::view_rng();
    use_ticker(GAUGE_PERIOD, move || {
        gauges.update(|g| *g = g.step(&mut rng));
    });

    let level = Memo::new(move |_| gauges.with(WellnessGauges::level));
    let energy = Signal::derive(move || gauges.with(|g| g.energy));
    let stress = Signal::derive(move || gauges.with(|g| g.stress));
    let focus = Signal::derive(move || gauges.with(|g| g.focus));
    let sleep = Signal::derive(move || gauges.with(|g| g.sleep));

    let moods = Mood::ALL
        .into_iter()
        .map(|m| {
            let class = move || if mood.get() == m { "mood-button mood-button--active" } else { "mood-button" };
            view! {
                <button class=class on:click=move |_| mood.set(m)>
                    <span class="mood-button__emoji">{m.emoji()}</span>
                    <span>{m.label()}</span>
                </button>
            }
        })
        .collect_view();

    let summary_row = |label: &'static str, value: Signal<f64>| {
        view! {
            <div class="summary-row">
                <span>{label}</span>
                <span class="summary-row__value">{move || format!("{}%", whole_percent(value.get()))}</span>
            </div>
        }
    };

    view! {
        <div class="page wellness">
            <div class="card filter-bar">
                <input class="input" type="search" placeholder="Search wellness tips, mood logs..." />
                <button class="button button--accent">"Search"</button>
            </div>
            <div class="page__header">
                <h1>"Employee Wellness Center"</h1>
                <p class="muted">"Monitor and improve your physical and mental well-being"</p>
            </div>
            <section class="card">
                <div class="card__head">
                    <h2 class="card__title">"Overall Wellness Score"</h2>
                    <span class=move || level.get().class()>{move || level.get().label()}</span>
                </div>
                <div class="bar bar--thick">
                    <div
                        class=move || format!("bar__fill {}", level.get().class())
                        style=move || format!("width: {}%;", whole_percent(gauges.with(WellnessGauges::score)))
                    ></div>
                </div>
            </section>
            <div class="stat-grid">
                <div class="stat-card">
                    <p class="stat-card__label">"Current Mood"</p>
                    <p class="stat-card__value">{move || mood.get().emoji()}</p>
                    <p class="muted">{move || mood.get().label()}</p>
                </div>
                {gauge_card("Energy Level", "⚡", energy)}
                {gauge_card("Stress Level", "❤", stress)}
                {gauge_card("Focus Level", "🧠", focus)}
            </div>
            <section class="card ai-suggestion">
                <h2 class="card__title">"AI Wellness Insights"</h2>
                <p>{move || gauges.with(|g| g.suggestion())}</p>
            </section>
            <div class="split">
                <section class="card split__main">
                    <h2 class="card__title">"Quick Mood Check"</h2>
                    <div class="wellness-hub__moods">{moods}</div>
                </section>
                <section class="card">
                    <h3 class="card__title">"Wellness Activities"</h3>
                    <div class="stack">
                        <button class="button button--accent">"🧘 Start Meditation (5 min)"</button>
                        <button class="button button--accent">"🚶 Take a Walk Break"</button>
                        <button class="button button--accent">"💧 Drink Water Reminder"</button>
                    </div>
                </section>
                <section class="card">
                    <h3 class="card__title">"Wellness Summary"</h3>
                    <div class="summary-row">
                        <span>"Last Checked"</span>
                        <span class="summary-row__value">{move || last_check.get()}</span>
                    </div>
                    {summary_row("Energy Level", energy)}
                    {summary_row("Stress Level", stress)}
                    {summary_row("Focus Level", focus)}
                    {summary_row("Sleep Quality", sleep)}
                </section>
            </div>
        </div>
    }
}
