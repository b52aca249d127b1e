//! Headline metric tile used on both dashboards.

use leptos::prelude::*;

use crate::model::{Kpi, TrendDirection};
use crate::util::classify::{kpi_variant_class, trend_class};

/// One KPI tile. `live_value` replaces the static value when the metric is
/// simulated on a timer.
#[component]
pub fn KpiCard(kpi: Kpi, #[prop(optional, into)] live_value: Option<Signal<String>>) -> impl IntoView {
    let Kpi { title, value, trend, icon, variant } = kpi;
    let value = live_value.unwrap_or_else(|| Signal::stored(value));

    view! {
        <div class=kpi_variant_class(variant)>
            <div class="kpi-card__head">
                <p class="kpi-card__title">{title}</p>
                <span class="kpi-card__icon">{icon}</span>
            </div>
            <div class="kpi-card__body">
                <h3 class="kpi-card__value">{move || value.get()}</h3>
                {trend
                    .map(|t| {
                        let arrow = match t.direction {
                            TrendDirection::Up => "↑",
                            TrendDirection::Down => "↓",
                        };
                        view! {
                            <div class=trend_class(t.direction)>
                                <span>{arrow}</span>
                                <span>{format!("{}%", t.value.abs())}</span>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
