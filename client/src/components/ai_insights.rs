//! Panel listing canned AI observations with their confidence.

use leptos::prelude::*;

use crate::model::AiInsight;
use crate::util::classify::{insight_icon, insight_style};

#[component]
pub fn AiInsights(insights: Vec<AiInsight>) -> impl IntoView {
    let items = insights
        .into_iter()
        .map(|insight| {
            view! {
                <li class=insight_style(insight.kind)>
                    <span class="insight__icon">{insight_icon(insight.kind)}</span>
                    <div class="insight__body">
                        <p class="insight__message">{insight.message}</p>
                        <div class="insight__meta">
                            <span>{insight.timestamp}</span>
                            {insight.confidence.map(|c| view! { <span class="insight__confidence">{format!("{c}% confidence")}</span> })}
                        </div>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card ai-insights">
            <h3 class="card__title">"AI Insights"</h3>
            <ul class="ai-insights__list">{items}</ul>
        </section>
    }
}
